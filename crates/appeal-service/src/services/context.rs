//! Service context - dependency container for services
//!
//! Holds the appeal store, the webhook notifier, and the handles the
//! readiness check probes.

use std::sync::Arc;

use appeal_core::traits::AppealRepository;
use appeal_db::{LocalAppealRepository, PgPool};

use super::error::{ServiceError, ServiceResult};
use super::notifier::WebhookNotifier;

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - The appeal store (usually the primary/fallback composition)
/// - The webhook notifier
/// - The PostgreSQL pool and local store, for health probes
#[derive(Clone)]
pub struct ServiceContext {
    appeal_repo: Arc<dyn AppealRepository>,
    notifier: Arc<WebhookNotifier>,
    pool: Option<PgPool>,
    local_store: Option<Arc<LocalAppealRepository>>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        appeal_repo: Arc<dyn AppealRepository>,
        notifier: Arc<WebhookNotifier>,
        pool: Option<PgPool>,
        local_store: Option<Arc<LocalAppealRepository>>,
    ) -> Self {
        Self {
            appeal_repo,
            notifier,
            pool,
            local_store,
        }
    }

    /// Get the appeal store
    pub fn appeal_repo(&self) -> &dyn AppealRepository {
        self.appeal_repo.as_ref()
    }

    /// Get the webhook notifier
    pub fn notifier(&self) -> &WebhookNotifier {
        self.notifier.as_ref()
    }

    /// Get the PostgreSQL pool, if a primary store is configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Get the local fallback store, if configured
    pub fn local_store(&self) -> Option<&LocalAppealRepository> {
        self.local_store.as_deref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("appeal_repo", &self.appeal_repo.backend())
            .field("webhook_enabled", &self.notifier.is_enabled())
            .field("pool", &self.pool.is_some())
            .field("local_store", &self.local_store.as_ref().map(|s| s.path().to_path_buf()))
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    appeal_repo: Option<Arc<dyn AppealRepository>>,
    notifier: Option<Arc<WebhookNotifier>>,
    pool: Option<PgPool>,
    local_store: Option<Arc<LocalAppealRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appeal_repo(mut self, repo: Arc<dyn AppealRepository>) -> Self {
        self.appeal_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: WebhookNotifier) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn local_store(mut self, store: Arc<LocalAppealRepository>) -> Self {
        self.local_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// The notifier defaults to a disabled one.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if no appeal store was given
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.appeal_repo
                .ok_or_else(|| ServiceError::validation("appeal_repo is required"))?,
            self.notifier
                .unwrap_or_else(|| Arc::new(WebhookNotifier::disabled())),
            self.pool,
            self.local_store,
        ))
    }
}
