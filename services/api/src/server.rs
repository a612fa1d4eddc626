use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_routes;
use axum_prometheus::PrometheusMetricLayer;
use ecoscore::config::AppConfig;
use ecoscore::error::AppError;
use ecoscore::telemetry;
use ecoscore::RateGovernor;
use std::sync::atomic::Ordering;
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
    let app_state = AppState::new(
        prometheus_handle,
        RateGovernor::new(config.rate_limit),
        &config.auth,
    );
    let readiness_flag = app_state.readiness.clone();

    let app = with_routes(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_requests = config.rate_limit.max_requests,
        api_keys = config.auth.api_keys.len(),
        "sustainability assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
