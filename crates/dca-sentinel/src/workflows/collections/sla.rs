use serde::Serialize;

use super::config::SlaPolicy;
use super::domain::{Case, CaseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaSeverity {
    Warning,
    Critical,
}

impl SlaSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            SlaSeverity::Warning => "Warning",
            SlaSeverity::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaAlert {
    pub case_id: CaseId,
    pub days_overdue: u32,
    pub severity: SlaSeverity,
    pub message: String,
}

/// Flags cases whose days overdue breach the SLA policy, in case order.
pub fn check_sla(cases: &[Case], policy: &SlaPolicy) -> Vec<SlaAlert> {
    cases
        .iter()
        .filter_map(|case| {
            let (severity, message) = if case.days_overdue > policy.critical_after_days {
                (
                    SlaSeverity::Critical,
                    format!("CRITICAL escalation: Case {}", case.id),
                )
            } else if case.days_overdue > policy.warning_after_days {
                (
                    SlaSeverity::Warning,
                    format!("Warning: SLA risk for Case {}", case.id),
                )
            } else {
                return None;
            };

            Some(SlaAlert {
                case_id: case.id.clone(),
                days_overdue: case.days_overdue,
                severity,
                message,
            })
        })
        .collect()
}
