use serde::{Deserialize, Serialize};

use super::config::TierThresholds;

/// Governance band an agency falls into for the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovernanceTier {
    Premier,
    Trusted,
    Monitored,
    Restricted,
}

impl GovernanceTier {
    pub const fn ordered() -> [GovernanceTier; 4] {
        [
            GovernanceTier::Premier,
            GovernanceTier::Trusted,
            GovernanceTier::Monitored,
            GovernanceTier::Restricted,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            GovernanceTier::Premier => "PREMIER",
            GovernanceTier::Trusted => "TRUSTED",
            GovernanceTier::Monitored => "MONITORED",
            GovernanceTier::Restricted => "RESTRICTED",
        }
    }

    /// Badge color used by dashboards.
    pub const fn color(self) -> &'static str {
        match self {
            GovernanceTier::Premier => "#27ae60",
            GovernanceTier::Trusted => "#2980b9",
            GovernanceTier::Monitored => "#f39c12",
            GovernanceTier::Restricted => "#c0392b",
        }
    }

    pub const fn is_restricted(self) -> bool {
        matches!(self, GovernanceTier::Restricted)
    }
}

impl std::fmt::Display for GovernanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps trust scores onto governance tiers through ordered threshold bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GovernanceClassifier {
    thresholds: TierThresholds,
}

impl GovernanceClassifier {
    pub fn new(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn classify(&self, trust_score: f64) -> GovernanceTier {
        if trust_score >= self.thresholds.premier {
            GovernanceTier::Premier
        } else if trust_score >= self.thresholds.trusted {
            GovernanceTier::Trusted
        } else if trust_score >= self.thresholds.monitored {
            GovernanceTier::Monitored
        } else {
            GovernanceTier::Restricted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_inclusive_lower_bounds() {
        let classifier = GovernanceClassifier::default();
        assert_eq!(classifier.classify(100.0), GovernanceTier::Premier);
        assert_eq!(classifier.classify(82.0), GovernanceTier::Premier);
        assert_eq!(classifier.classify(81.9), GovernanceTier::Trusted);
        assert_eq!(classifier.classify(60.0), GovernanceTier::Trusted);
        assert_eq!(classifier.classify(59.9), GovernanceTier::Monitored);
        assert_eq!(classifier.classify(40.0), GovernanceTier::Monitored);
        assert_eq!(classifier.classify(39.9), GovernanceTier::Restricted);
        assert_eq!(classifier.classify(0.0), GovernanceTier::Restricted);
    }

    #[test]
    fn every_score_maps_to_exactly_one_band() {
        let classifier = GovernanceClassifier::default();
        let mut previous = GovernanceTier::Restricted;
        let rank = |tier: GovernanceTier| {
            GovernanceTier::ordered()
                .iter()
                .position(|candidate| *candidate == tier)
                .expect("tier listed")
        };

        // Walking upward in 0.1 steps, tiers only ever improve by one band.
        for step in 0..=1000 {
            let score = step as f64 / 10.0;
            let tier = classifier.classify(score);
            let delta = rank(previous) as i32 - rank(tier) as i32;
            assert!((0..=1).contains(&delta), "gap or overlap at {score}");
            previous = tier;
        }
        assert_eq!(previous, GovernanceTier::Premier);
    }

    #[test]
    fn nan_scores_are_restricted() {
        let classifier = GovernanceClassifier::default();
        assert_eq!(classifier.classify(f64::NAN), GovernanceTier::Restricted);
    }

    #[test]
    fn tiers_carry_fixed_labels_and_colors() {
        assert_eq!(GovernanceTier::Premier.label(), "PREMIER");
        assert_eq!(GovernanceTier::Restricted.color(), "#c0392b");
        assert_eq!(
            serde_json::to_value(GovernanceTier::Monitored).expect("serializes"),
            serde_json::json!("MONITORED")
        );
    }
}
