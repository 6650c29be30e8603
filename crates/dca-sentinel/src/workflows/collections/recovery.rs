use super::config::RecoveryModel;
use super::round_one_decimal;
use super::trust::MAX_TRUST_SCORE;

/// Estimates the percentage chance of collecting an overdue invoice.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoveryPredictor {
    model: RecoveryModel,
}

impl RecoveryPredictor {
    pub fn new(model: RecoveryModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &RecoveryModel {
        &self.model
    }

    /// Exponential decay over days overdue, scaled by agency trust, with a
    /// penalty for large tickets. Always lands in `[floor, ceiling]`, rounded
    /// to one decimal.
    pub fn predict(&self, amount: f64, days_overdue: u32, agency_trust: f64) -> f64 {
        let model = &self.model;
        let trust = if agency_trust.is_nan() {
            0.0
        } else {
            agency_trust.clamp(0.0, MAX_TRUST_SCORE)
        };

        let time_decay = (-(days_overdue as f64) / model.decay_days).exp();
        let complexity = if amount > model.high_value_threshold {
            model.high_value_multiplier
        } else {
            1.0
        };

        let probability = model.base * (trust / MAX_TRUST_SCORE) * time_decay * complexity;
        let bounded = if probability.is_nan() {
            model.floor
        } else {
            probability.clamp(model.floor, model.ceiling)
        };

        round_one_decimal(bounded)
    }
}
