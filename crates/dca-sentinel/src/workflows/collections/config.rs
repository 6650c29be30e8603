use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

pub const DEFAULT_FALLBACK_BUCKET: &str = "INTERNAL_LEGAL";

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Tunable parameters for every stage of an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    pub trust: TrustWeights,
    pub tiers: TierThresholds,
    pub recovery: RecoveryModel,
    pub restriction: RestrictionPolicy,
    pub sla: SlaPolicy,
    pub fallback_bucket: String,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            trust: TrustWeights::default(),
            tiers: TierThresholds::default(),
            recovery: RecoveryModel::default(),
            restriction: RestrictionPolicy::default(),
            sla: SlaPolicy::default(),
            fallback_bucket: DEFAULT_FALLBACK_BUCKET.to_string(),
        }
    }
}

impl AllocationConfig {
    pub fn with_fallback_bucket(mut self, name: impl Into<String>) -> Self {
        self.fallback_bucket = name.into();
        self
    }

    /// Reject parameter sets that would break the scoring or allocation invariants.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let weights = [self.trust.recovery_rate, self.trust.sla_adherence];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0)
            || (weights.iter().sum::<f64>() - 1.0).abs() > WEIGHT_TOLERANCE
        {
            return Err(ConfigurationError::TrustWeights {
                recovery_rate: self.trust.recovery_rate,
                sla_adherence: self.trust.sla_adherence,
            });
        }

        let TierThresholds {
            premier,
            trusted,
            monitored,
        } = self.tiers;
        let ordered = premier.is_finite()
            && trusted.is_finite()
            && monitored.is_finite()
            && premier > trusted
            && trusted > monitored
            && monitored > 0.0
            && premier <= 100.0;
        if !ordered {
            return Err(ConfigurationError::TierThresholds {
                premier,
                trusted,
                monitored,
            });
        }

        let model = &self.recovery;
        if !(model.base.is_finite() && model.base > 0.0) {
            return Err(ConfigurationError::RecoveryModel(
                "base probability must be positive",
            ));
        }
        if !(model.decay_days.is_finite() && model.decay_days > 0.0) {
            return Err(ConfigurationError::RecoveryModel(
                "decay horizon must be positive",
            ));
        }
        if !(model.high_value_multiplier > 0.0 && model.high_value_multiplier <= 1.0) {
            return Err(ConfigurationError::RecoveryModel(
                "high value multiplier must lie in (0, 1]",
            ));
        }
        if !(model.floor.is_finite()
            && model.ceiling.is_finite()
            && 0.0 <= model.floor
            && model.floor <= model.ceiling
            && model.ceiling <= 100.0)
        {
            return Err(ConfigurationError::RecoveryModel(
                "probability bounds must satisfy 0 <= floor <= ceiling <= 100",
            ));
        }

        if self.sla.warning_after_days > self.sla.critical_after_days {
            return Err(ConfigurationError::SlaPolicy {
                warning: self.sla.warning_after_days,
                critical: self.sla.critical_after_days,
            });
        }

        if self.fallback_bucket.trim().is_empty() {
            return Err(ConfigurationError::EmptyFallbackBucket);
        }

        Ok(())
    }
}

/// Linear weights combining agency metrics; must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustWeights {
    pub recovery_rate: f64,
    pub sla_adherence: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            recovery_rate: 0.6,
            sla_adherence: 0.4,
        }
    }
}

/// Lower bounds (inclusive, 0-100 scale) of the three upper governance tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub premier: f64,
    pub trusted: f64,
    pub monitored: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            premier: 82.0,
            trusted: 60.0,
            monitored: 40.0,
        }
    }
}

/// Parameters of the time-decay recovery model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryModel {
    /// Probability (percent) for a fresh invoice handled by a perfect agency.
    pub base: f64,
    /// Days overdue over which the likelihood decays by a factor of e.
    pub decay_days: f64,
    pub high_value_threshold: f64,
    pub high_value_multiplier: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for RecoveryModel {
    fn default() -> Self {
        Self {
            base: 100.0,
            decay_days: 120.0,
            high_value_threshold: 100_000.0,
            high_value_multiplier: 0.82,
            floor: 5.0,
            ceiling: 99.0,
        }
    }
}

/// Case ceilings applied to agencies in the restricted tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestrictionPolicy {
    pub max_amount: f64,
    pub max_days_overdue: u32,
}

impl Default for RestrictionPolicy {
    fn default() -> Self {
        Self {
            max_amount: 50_000.0,
            max_days_overdue: 60,
        }
    }
}

/// Days-overdue limits that raise SLA alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaPolicy {
    pub warning_after_days: u32,
    pub critical_after_days: u32,
}

impl Default for SlaPolicy {
    fn default() -> Self {
        Self {
            warning_after_days: 60,
            critical_after_days: 90,
        }
    }
}
