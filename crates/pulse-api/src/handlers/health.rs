//! Health check handlers

use pulse_service::dto::responses::HealthResponse;

use crate::response::ApiJson;

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> ApiJson<HealthResponse> {
    ApiJson(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe
///
/// GET /health/ready
pub async fn readiness_check() -> ApiJson<HealthResponse> {
    ApiJson(HealthResponse {
        status: "ready",
        version: env!("CARGO_PKG_VERSION"),
    })
}
