use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::{AgencyRecord, CaseRecord};
use super::{AllocationRun, CollectionsEngine, CollectionsError};

/// Request body shared by the allocation endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationRequest {
    #[serde(default)]
    pub cases: Vec<CaseRecord>,
    #[serde(default)]
    pub agencies: Vec<AgencyRecord>,
}

/// Router exposing the allocation pipeline as a stateless request/response computation.
pub fn collections_router(engine: Arc<CollectionsEngine>) -> Router {
    Router::new()
        .route("/api/v1/collections/allocate", post(allocate_handler))
        .route("/api/v1/collections/report", post(report_handler))
        .with_state(engine)
}

pub(crate) async fn allocate_handler(
    State(engine): State<Arc<CollectionsEngine>>,
    request: Result<axum::Json<AllocationRequest>, JsonRejection>,
) -> Response {
    let axum::Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection),
    };
    match run(&engine, request) {
        Ok(run) => (StatusCode::OK, axum::Json(run.allocation_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler(
    State(engine): State<Arc<CollectionsEngine>>,
    request: Result<axum::Json<AllocationRequest>, JsonRejection>,
) -> Response {
    let axum::Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection),
    };
    match run(&engine, request) {
        Ok(run) => (StatusCode::OK, axum::Json(run.summary())).into_response(),
        Err(error) => error_response(error),
    }
}

fn run(
    engine: &CollectionsEngine,
    request: AllocationRequest,
) -> Result<AllocationRun, CollectionsError> {
    engine.run(request.cases, request.agencies)
}

fn error_response(error: CollectionsError) -> Response {
    warn!(%error, "rejected allocation request");
    let kind = match &error {
        CollectionsError::Validation(_) => "validation",
        CollectionsError::Range(_) => "range",
        CollectionsError::Configuration(_) => "configuration",
    };
    bad_request(error.to_string(), kind)
}

/// Undecodable bodies are malformed input, reported like any other validation failure.
fn rejection_response(rejection: JsonRejection) -> Response {
    let error = rejection.body_text();
    warn!(%error, "rejected undecodable allocation request");
    bad_request(error, "validation")
}

fn bad_request(error: String, kind: &'static str) -> Response {
    let payload = json!({
        "error": error,
        "kind": kind,
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
