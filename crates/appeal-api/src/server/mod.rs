//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use appeal_common::{AppConfig, AppError};
use appeal_db::{
    create_lazy_pool, ensure_schema, FallbackAppealRepository, LocalAppealRepository,
    PgAppealRepository,
};
use appeal_service::{ServiceContextBuilder, WebhookNotifier};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware is applied so health checks are
/// never rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.api.request_timeout(),
        config.app.env.is_production(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// The database pool connects lazily, so an unreachable database does not
/// stop startup; requests fall through to the local store instead.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let db_config = appeal_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: config.database.acquire_timeout(),
        ..Default::default()
    };
    let pool = create_lazy_pool(&db_config).map_err(|e| AppError::Config(e.to_string()))?;

    match ensure_schema(&pool).await {
        Ok(()) => info!("PostgreSQL schema ready"),
        Err(e) => warn!(error = %e, "PostgreSQL unavailable, appeals will use the local store"),
    }

    let local_store = Arc::new(LocalAppealRepository::new(
        config.fallback.data_dir.clone(),
        &config.fallback.storage_key,
    ));
    info!(path = %local_store.path().display(), "Local appeal store configured");

    let appeal_repo = Arc::new(FallbackAppealRepository::new(
        Arc::new(PgAppealRepository::new(pool.clone())),
        local_store.clone(),
    ));

    let notifier = WebhookNotifier::from_config(&config.webhook)?;
    if !notifier.is_enabled() {
        warn!("APPEAL_WEBHOOK_URL not set, appeal notifications are disabled");
    }

    let service_context = ServiceContextBuilder::new()
        .appeal_repo(appeal_repo)
        .notifier(notifier)
        .pool(pool)
        .local_store(local_store)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {}", e)))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
