use tracing::{debug, info, warn};

use super::config::{AllocationConfig, RestrictionPolicy};
use super::domain::{
    AgencyBucket, AllocationResult, Assignment, Case, FallbackBucket, ScoredAgency,
};
use super::governance::GovernanceTier;
use super::recovery::RecoveryPredictor;

/// Greedy first-fit matcher placing each case with the most trusted eligible agency.
#[derive(Debug, Clone)]
pub struct Allocator {
    predictor: RecoveryPredictor,
    restriction: RestrictionPolicy,
    fallback_bucket: String,
}

impl Allocator {
    pub fn new(config: &AllocationConfig) -> Self {
        Self {
            predictor: RecoveryPredictor::new(config.recovery),
            restriction: config.restriction,
            fallback_bucket: config.fallback_bucket.clone(),
        }
    }

    /// Whether an agency's governance tier bars it from taking this case.
    pub fn is_restricted(&self, tier: GovernanceTier, case: &Case) -> bool {
        tier.is_restricted()
            && (case.amount > self.restriction.max_amount
                || case.days_overdue > self.restriction.max_days_overdue)
    }

    /// Single pass over `cases` in input order. Agencies are scanned by trust
    /// descending; equal scores keep their input order. Cases no agency may
    /// take land in the fallback bucket.
    pub fn allocate(&self, cases: &[Case], agencies: &[ScoredAgency]) -> AllocationResult {
        let mut buckets: Vec<AgencyBucket> = agencies
            .iter()
            .map(|agency| AgencyBucket {
                agency: agency.name.clone(),
                assignments: Vec::new(),
            })
            .collect();
        let mut fallback = FallbackBucket {
            name: self.fallback_bucket.clone(),
            cases: Vec::new(),
        };

        let mut ranked: Vec<usize> = (0..agencies.len()).collect();
        ranked.sort_by(|&a, &b| {
            agencies[b]
                .trust_score
                .total_cmp(&agencies[a].trust_score)
        });

        for case in cases {
            let chosen = ranked.iter().copied().find(|&index| {
                let agency = &agencies[index];
                let restricted = self.is_restricted(agency.tier, case);
                if restricted {
                    debug!(
                        case_id = %case.id,
                        agency = %agency.name,
                        "agency tier restricts case; trying next agency"
                    );
                }
                !restricted
            });

            match chosen {
                Some(index) => {
                    let agency = &agencies[index];
                    let recovery_probability =
                        self.predictor
                            .predict(case.amount, case.days_overdue, agency.trust_score);
                    buckets[index].assignments.push(Assignment {
                        case_id: case.id.clone(),
                        amount: case.amount,
                        days_overdue: case.days_overdue,
                        recovery_probability,
                        tier: agency.tier,
                    });
                }
                None => {
                    warn!(
                        case_id = %case.id,
                        bucket = %fallback.name,
                        "no eligible agency; routing case to fallback"
                    );
                    fallback.cases.push(case.clone());
                }
            }
        }

        let result = AllocationResult { buckets, fallback };
        info!(
            cases = cases.len(),
            agencies = agencies.len(),
            assigned = result.assigned_count(),
            fallback = result.fallback_count(),
            "allocation pass complete"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::collections::domain::CaseId;

    fn case(id: &str, amount: f64, days_overdue: u32) -> Case {
        Case {
            id: CaseId(id.to_string()),
            amount,
            days_overdue,
        }
    }

    fn agency(name: &str, trust_score: f64, tier: GovernanceTier) -> ScoredAgency {
        ScoredAgency {
            name: name.to_string(),
            recovery_rate: 0.0,
            sla_adherence: 0.0,
            trust_score,
            tier,
        }
    }

    #[test]
    fn restriction_applies_only_to_restricted_tier() {
        let allocator = Allocator::new(&AllocationConfig::default());
        let large = case("C1", 60_000.0, 10);
        let stale = case("C2", 1_000.0, 61);
        let small = case("C3", 50_000.0, 60);

        assert!(allocator.is_restricted(GovernanceTier::Restricted, &large));
        assert!(allocator.is_restricted(GovernanceTier::Restricted, &stale));
        assert!(!allocator.is_restricted(GovernanceTier::Restricted, &small));
        assert!(!allocator.is_restricted(GovernanceTier::Monitored, &large));
    }

    #[test]
    fn equal_trust_keeps_input_order() {
        let allocator = Allocator::new(&AllocationConfig::default());
        let agencies = vec![
            agency("First", 70.0, GovernanceTier::Trusted),
            agency("Second", 70.0, GovernanceTier::Trusted),
        ];

        let result = allocator.allocate(&[case("C1", 10.0, 1)], &agencies);

        assert_eq!(result.buckets[0].assignments.len(), 1);
        assert!(result.buckets[1].assignments.is_empty());
    }

    #[test]
    fn buckets_follow_input_order_even_when_empty() {
        let allocator = Allocator::new(&AllocationConfig::default());
        let agencies = vec![
            agency("Low", 45.0, GovernanceTier::Monitored),
            agency("High", 90.0, GovernanceTier::Premier),
        ];

        let result = allocator.allocate(&[case("C1", 10.0, 1)], &agencies);

        let names: Vec<_> = result.buckets.iter().map(|b| b.agency.as_str()).collect();
        assert_eq!(names, vec!["Low", "High"]);
        assert!(result.buckets[0].assignments.is_empty());
        assert_eq!(result.buckets[1].assignments[0].tier, GovernanceTier::Premier);
    }

    #[test]
    fn empty_case_list_yields_empty_buckets() {
        let allocator = Allocator::new(&AllocationConfig::default());
        let agencies = vec![agency("Solo", 90.0, GovernanceTier::Premier)];

        let result = allocator.allocate(&[], &agencies);

        assert_eq!(result.buckets.len(), 1);
        assert_eq!(result.total_cases(), 0);
        assert_eq!(result.average_recovery_probability(), 0.0);
    }
}
