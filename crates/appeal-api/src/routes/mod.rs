//! Route definitions
//!
//! All API routes mounted under /api. Health routes are kept apart so they
//! skip rate limiting.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{appeals, health, webhook};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(appeal_routes())
        .merge(webhook_routes())
}

/// Appeal routes
fn appeal_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/appeals",
            post(appeals::submit_appeal).get(appeals::list_appeals),
        )
        .route("/appeals/:id", get(appeals::get_appeal))
        .route("/appeals/:id/status", patch(appeals::update_appeal_status))
}

/// Webhook relay routes
fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhook/appeal", post(webhook::relay_appeal))
}
