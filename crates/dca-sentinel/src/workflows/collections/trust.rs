use super::config::TrustWeights;
use super::round_one_decimal;

pub const MAX_TRUST_SCORE: f64 = 100.0;

/// Collapses agency performance metrics into a 0-100 trust score.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustScorer {
    weights: TrustWeights,
}

impl TrustScorer {
    pub fn new(weights: TrustWeights) -> Self {
        Self { weights }
    }

    /// Weighted blend of both rates (each in `[0, 1]`), scaled to `[0, 100]`,
    /// clamped, and rounded to one decimal.
    pub fn score(&self, recovery_rate: f64, sla_adherence: f64) -> f64 {
        let blended = recovery_rate * self.weights.recovery_rate
            + sla_adherence * self.weights.sla_adherence;
        let scaled = blended * MAX_TRUST_SCORE;
        if scaled.is_nan() {
            return 0.0;
        }

        round_one_decimal(scaled.clamp(0.0, MAX_TRUST_SCORE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blends_rates_with_default_weights() {
        let scorer = TrustScorer::default();
        assert_eq!(scorer.score(0.95, 0.98), 96.2);
        assert_eq!(scorer.score(0.89, 0.92), 90.2);
        assert_eq!(scorer.score(0.40, 0.50), 44.0);
    }

    #[test]
    fn clamps_to_score_range() {
        let scorer = TrustScorer::default();
        assert_eq!(scorer.score(1.0, 1.0), 100.0);
        assert_eq!(scorer.score(0.0, 0.0), 0.0);
        assert_eq!(scorer.score(3.0, 2.0), 100.0);
        assert_eq!(scorer.score(-1.0, 0.0), 0.0);
        assert_eq!(scorer.score(f64::NAN, 0.5), 0.0);
    }

    #[test]
    fn honours_custom_weights() {
        let scorer = TrustScorer::new(TrustWeights {
            recovery_rate: 0.0,
            sla_adherence: 1.0,
        });
        assert_eq!(scorer.score(0.1, 0.75), 75.0);
    }
}
