use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_collections_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use dca_sentinel::config::AppConfig;
use dca_sentinel::error::AppError;
use dca_sentinel::telemetry;
use dca_sentinel::workflows::collections::CollectionsEngine;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(CollectionsEngine::new(
        config.collections.allocation_config(),
    )?);

    let app = with_collections_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        fallback_bucket = %config.collections.fallback_bucket,
        "collections allocation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
