//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use appeal_service::{HealthResponse, HealthService, ReadinessResponse};
use axum::{extract::State, http::StatusCode, Json};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with store health
///
/// GET /health/ready
///
/// A down database only degrades the service; it is unready when the
/// fallback store cannot be written.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let response = HealthService::new(state.service_context()).readiness().await;
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
