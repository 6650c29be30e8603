use super::super::governance::GovernanceTier;
use super::super::sla::SlaSeverity;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioKpis {
    pub portfolio_value: f64,
    pub average_recovery_probability: f64,
    pub total_cases: usize,
    pub assigned_cases: usize,
    pub fallback_cases: usize,
    pub critical_alerts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentView {
    pub case_id: String,
    pub amount: f64,
    pub days_overdue: u32,
    pub recovery_probability: f64,
    pub tier: GovernanceTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgencyView {
    pub name: String,
    pub trust_score: f64,
    pub tier: GovernanceTier,
    pub tier_label: &'static str,
    pub color: &'static str,
    pub assigned_value: f64,
    pub assignments: Vec<AssignmentView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseView {
    pub case_id: String,
    pub amount: f64,
    pub days_overdue: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FallbackView {
    pub name: String,
    pub cases: Vec<CaseView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlaAlertView {
    pub case_id: String,
    pub severity: SlaSeverity,
    pub severity_label: &'static str,
    pub message: String,
}

/// Agency buckets in input order plus the fallback bucket.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationView {
    pub agencies: Vec<AgencyView>,
    pub fallback: FallbackView,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionsReportSummary {
    pub kpis: PortfolioKpis,
    pub agencies: Vec<AgencyView>,
    pub fallback: FallbackView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<SlaAlertView>,
}
