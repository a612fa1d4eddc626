use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router};
use ecoscore::assessment::Methodology;
use ecoscore::error::AppError;
use ecoscore::{
    cbam_analysis, AssessmentRequest, AssessmentResult, CbamAnalysis, MaterialComposition,
};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::info;

pub(crate) const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Deserialize)]
pub(crate) struct CbamRequest {
    material_composition: MaterialComposition,
}

pub(crate) fn with_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/v1/methodology", axum::routing::get(methodology_endpoint))
        .route(
            "/v1/assess-impact",
            axum::routing::post(assess_impact_endpoint),
        )
        .route(
            "/v1/cbam-analysis",
            axum::routing::post(cbam_analysis_endpoint),
        )
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn methodology_endpoint() -> Json<Methodology> {
    Json(Methodology::current())
}

/// Body extraction is deferred so that authentication and throttling answer first.
pub(crate) async fn assess_impact_endpoint(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResult>, Response> {
    admit_caller(&state, &headers).map_err(IntoResponse::into_response)?;
    let Json(request) = body.map_err(|rejection| ApiRejection::from(rejection).into_response())?;
    request
        .validate()
        .map_err(|err| AppError::from(err).into_response())?;

    let result = request.assess();
    info!(
        product = %result.product_name,
        score = result.total_sustainability_score,
        "assessment served"
    );
    Ok(Json(result))
}

pub(crate) async fn cbam_analysis_endpoint(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    body: Result<Json<CbamRequest>, JsonRejection>,
) -> Result<Json<CbamAnalysis>, ApiRejection> {
    admit_caller(&state, &headers)?;
    let Json(request) = body?;
    Ok(Json(cbam_analysis(&request.material_composition)))
}

/// Error reply carrying the `{"error": ...}` body shared by every route.
#[derive(Debug)]
pub(crate) struct ApiRejection {
    status: StatusCode,
    message: String,
}

impl ApiRejection {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

/// Authenticate the API key, then charge it against the rate window.
fn admit_caller(state: &AppState, headers: &HeaderMap) -> Result<(), ApiRejection> {
    let key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            ApiRejection::new(
                StatusCode::UNAUTHORIZED,
                "Missing API key. Provide X-API-Key header.",
            )
        })?;

    if !state.api_keys.contains(key) {
        return Err(ApiRejection::new(StatusCode::UNAUTHORIZED, "Invalid API key."));
    }

    if !state.governor.admit(key) {
        let limit = state.governor.config();
        let message = format!(
            "Too many requests. Max {} per {} per API key.",
            limit.max_requests,
            window_label(limit.window)
        );
        return Err(ApiRejection::new(StatusCode::TOO_MANY_REQUESTS, message));
    }

    Ok(())
}

fn window_label(window: Duration) -> String {
    if window == Duration::from_secs(1) {
        "second".to_string()
    } else if window.subsec_millis() == 0 {
        format!("{} seconds", window.as_secs())
    } else {
        format!("{} ms", window.as_millis())
    }
}
