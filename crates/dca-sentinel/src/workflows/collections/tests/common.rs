use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::collections::{
    AgencyRecord, AllocationConfig, CaseRecord, CollectionsEngine, CollectionsGuard,
};

pub(super) fn case_record(id: &str, amount: f64, days_overdue: i64) -> CaseRecord {
    CaseRecord {
        case_id: Some(id.to_string()),
        invoice_amount: Some(amount),
        days_overdue: Some(days_overdue),
    }
}

pub(super) fn agency_record(name: &str, recovery_rate: f64, sla_adherence: f64) -> AgencyRecord {
    AgencyRecord {
        name: Some(name.to_string()),
        recovery_rate: Some(recovery_rate),
        sla_adherence: Some(sla_adherence),
    }
}

/// Alpha scores 96.2 (PREMIER); Beta scores 44.0 (MONITORED).
pub(super) fn alpha_beta() -> Vec<AgencyRecord> {
    vec![
        agency_record("Alpha", 0.95, 0.98),
        agency_record("Beta", 0.40, 0.50),
    ]
}

/// Scores 20.0, well inside the RESTRICTED band.
pub(super) fn restricted_agency() -> AgencyRecord {
    agency_record("Gamma", 0.20, 0.20)
}

pub(super) fn engine() -> CollectionsEngine {
    CollectionsEngine::new(AllocationConfig::default()).expect("default config is valid")
}

pub(super) fn shared_engine() -> Arc<CollectionsEngine> {
    Arc::new(engine())
}

pub(super) fn guard() -> CollectionsGuard {
    CollectionsGuard::default()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
