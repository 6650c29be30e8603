//! Synthetic agency and case data for demos, rebuilt fresh on every call.

use super::domain::{AgencyRecord, CaseRecord};

pub const AGENCIES_CSV: &str = "dca_name,recovery_rate,sla_adherence\n\
Alpha India,0.89,0.92\n\
Beta Recoveries,0.68,0.75\n\
Gamma Debt-Solvers,0.38,0.45\n";

pub const CASES_CSV: &str = "case_id,invoice_amount,days_overdue\n\
IND-7701,450000,45\n\
IND-7702,12000,85\n\
IND-7703,95000,20\n\
IND-7704,5000,120\n";

pub fn agencies() -> Vec<AgencyRecord> {
    [
        ("Alpha India", 0.89, 0.92),
        ("Beta Recoveries", 0.68, 0.75),
        ("Gamma Debt-Solvers", 0.38, 0.45),
    ]
    .into_iter()
    .map(|(name, recovery_rate, sla_adherence)| AgencyRecord {
        name: Some(name.to_string()),
        recovery_rate: Some(recovery_rate),
        sla_adherence: Some(sla_adherence),
    })
    .collect()
}

pub fn cases() -> Vec<CaseRecord> {
    [
        ("IND-7701", 450_000.0, 45),
        ("IND-7702", 12_000.0, 85),
        ("IND-7703", 95_000.0, 20),
        ("IND-7704", 5_000.0, 120),
    ]
    .into_iter()
    .map(|(case_id, invoice_amount, days_overdue)| CaseRecord {
        case_id: Some(case_id.to_string()),
        invoice_amount: Some(invoice_amount),
        days_overdue: Some(days_overdue),
    })
    .collect()
}
