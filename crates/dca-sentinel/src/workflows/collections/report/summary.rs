use super::super::domain::{Assignment, Case, ScoredAgency};
use super::super::round_one_decimal;
use super::super::sla::{SlaAlert, SlaSeverity};
use super::super::AllocationRun;
use super::views::{
    AgencyView, AllocationView, AssignmentView, CaseView, CollectionsReportSummary, FallbackView,
    PortfolioKpis, SlaAlertView,
};

impl AllocationRun {
    pub fn allocation_view(&self) -> AllocationView {
        let agencies = self
            .agencies
            .iter()
            .zip(&self.allocation.buckets)
            .map(|(agency, bucket)| agency_view(agency, &bucket.assignments))
            .collect();

        let fallback = FallbackView {
            name: self.allocation.fallback.name.clone(),
            cases: self
                .allocation
                .fallback
                .cases
                .iter()
                .map(Case::to_view)
                .collect(),
        };

        AllocationView { agencies, fallback }
    }

    pub fn summary(&self) -> CollectionsReportSummary {
        let AllocationView { agencies, fallback } = self.allocation_view();

        let kpis = PortfolioKpis {
            portfolio_value: self.cases.iter().map(|case| case.amount).sum(),
            average_recovery_probability: self.allocation.average_recovery_probability(),
            total_cases: self.cases.len(),
            assigned_cases: self.allocation.assigned_count(),
            fallback_cases: self.allocation.fallback_count(),
            critical_alerts: self
                .alerts
                .iter()
                .filter(|alert| alert.severity == SlaSeverity::Critical)
                .count(),
        };

        CollectionsReportSummary {
            kpis,
            agencies,
            fallback,
            alerts: self.alerts.iter().map(SlaAlert::to_view).collect(),
        }
    }
}

fn agency_view(agency: &ScoredAgency, assignments: &[Assignment]) -> AgencyView {
    let assigned_value = assignments.iter().map(|item| item.amount).sum::<f64>();

    AgencyView {
        name: agency.name.clone(),
        trust_score: agency.trust_score,
        tier: agency.tier,
        tier_label: agency.tier.label(),
        color: agency.tier.color(),
        assigned_value: round_one_decimal(assigned_value),
        assignments: assignments.iter().map(Assignment::to_view).collect(),
    }
}

impl Assignment {
    pub fn to_view(&self) -> AssignmentView {
        AssignmentView {
            case_id: self.case_id.0.clone(),
            amount: self.amount,
            days_overdue: self.days_overdue,
            recovery_probability: self.recovery_probability,
            tier: self.tier,
        }
    }
}

impl Case {
    pub fn to_view(&self) -> CaseView {
        CaseView {
            case_id: self.id.0.clone(),
            amount: self.amount,
            days_overdue: self.days_overdue,
        }
    }
}

impl SlaAlert {
    pub fn to_view(&self) -> SlaAlertView {
        SlaAlertView {
            case_id: self.case_id.0.clone(),
            severity: self.severity,
            severity_label: self.severity.label(),
            message: self.message.clone(),
        }
    }
}
