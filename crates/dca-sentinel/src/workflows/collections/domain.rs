use serde::{Deserialize, Serialize};

use super::governance::GovernanceTier;

/// Identifier wrapper for an overdue invoice case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub String);

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case record as received from an export or API payload, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default, alias = "amount")]
    pub invoice_amount: Option<f64>,
    #[serde(default)]
    pub days_overdue: Option<i64>,
}

/// Agency performance record as received, before validation and scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencyRecord {
    #[serde(default, alias = "dca_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub recovery_rate: Option<f64>,
    #[serde(default)]
    pub sla_adherence: Option<f64>,
}

/// Validated overdue invoice. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub amount: f64,
    pub days_overdue: u32,
}

/// Validated agency with its derived trust score and governance tier attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAgency {
    pub name: String,
    pub recovery_rate: f64,
    pub sla_adherence: f64,
    pub trust_score: f64,
    pub tier: GovernanceTier,
}

/// A case placed with an agency, annotated with its predicted recovery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub case_id: CaseId,
    pub amount: f64,
    pub days_overdue: u32,
    pub recovery_probability: f64,
    pub tier: GovernanceTier,
}

/// Ordered assignments owned by one agency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyBucket {
    pub agency: String,
    pub assignments: Vec<Assignment>,
}

/// Overflow bucket holding cases no agency was eligible to take.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackBucket {
    pub name: String,
    pub cases: Vec<Case>,
}

/// Outcome of a single allocation pass.
///
/// Buckets follow agency input order and every configured agency has one,
/// possibly empty. Each input case lands in exactly one agency bucket or in
/// the fallback bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    pub buckets: Vec<AgencyBucket>,
    pub fallback: FallbackBucket,
}

impl AllocationResult {
    pub fn bucket(&self, agency: &str) -> Option<&AgencyBucket> {
        self.buckets.iter().find(|bucket| bucket.agency == agency)
    }

    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.assignments.iter())
    }

    pub fn assigned_count(&self) -> usize {
        self.buckets
            .iter()
            .map(|bucket| bucket.assignments.len())
            .sum()
    }

    pub fn fallback_count(&self) -> usize {
        self.fallback.cases.len()
    }

    pub fn total_cases(&self) -> usize {
        self.assigned_count() + self.fallback_count()
    }

    /// Mean recovery probability across assigned cases, 0 when nothing was assigned.
    pub fn average_recovery_probability(&self) -> f64 {
        let assigned = self.assigned_count();
        if assigned == 0 {
            return 0.0;
        }

        let total: f64 = self
            .assignments()
            .map(|assignment| assignment.recovery_probability)
            .sum();
        super::round_one_decimal(total / assigned as f64)
    }
}
