//! Primary-then-fallback composition of two appeal stores
//!
//! Writes go to the primary store and land in the fallback only when the
//! primary is unavailable. Reads consult both, so appeals saved during an
//! outage stay visible after the primary recovers.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{instrument, warn};

use appeal_core::traits::{AppealRepository, RepoResult};
use appeal_core::{Appeal, AppealId, AppealStatus};

/// Decorator that falls back to a second store when the first one fails
#[derive(Clone)]
pub struct FallbackAppealRepository {
    primary: Arc<dyn AppealRepository>,
    fallback: Arc<dyn AppealRepository>,
}

impl FallbackAppealRepository {
    pub fn new(primary: Arc<dyn AppealRepository>, fallback: Arc<dyn AppealRepository>) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &Arc<dyn AppealRepository> {
        &self.primary
    }

    pub fn fallback(&self) -> &Arc<dyn AppealRepository> {
        &self.fallback
    }
}

#[async_trait]
impl AppealRepository for FallbackAppealRepository {
    fn backend(&self) -> &'static str {
        "fallback"
    }

    #[instrument(skip(self, appeal), fields(appeal_id = %appeal.id))]
    async fn create(&self, appeal: &Appeal) -> RepoResult<()> {
        match self.primary.create(appeal).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_infrastructure() => {
                warn!(
                    primary = self.primary.backend(),
                    fallback = self.fallback.backend(),
                    error = %e,
                    "Primary store unavailable, saving appeal to fallback"
                );
                self.fallback.create(appeal).await
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Appeal>> {
        match self.primary.list().await {
            Ok(appeals) => match self.fallback.list().await {
                Ok(outage) if outage.is_empty() => Ok(appeals),
                Ok(outage) => Ok(merge_newest_first(appeals, outage)),
                Err(e) => {
                    warn!(
                        fallback = self.fallback.backend(),
                        error = %e,
                        "Fallback store unreadable, listing primary only"
                    );
                    Ok(appeals)
                }
            },
            Err(e) => {
                warn!(
                    primary = self.primary.backend(),
                    error = %e,
                    "Primary store unavailable, listing from fallback"
                );
                self.fallback.list().await
            }
        }
    }

    #[instrument(skip(self), fields(appeal_id = %id))]
    async fn find_by_id(&self, id: &AppealId) -> RepoResult<Option<Appeal>> {
        match self.primary.find_by_id(id).await {
            Ok(Some(appeal)) => Ok(Some(appeal)),
            Ok(None) => self.fallback.find_by_id(id).await,
            Err(e) => {
                warn!(
                    primary = self.primary.backend(),
                    error = %e,
                    "Primary store unavailable, reading from fallback"
                );
                self.fallback.find_by_id(id).await
            }
        }
    }

    #[instrument(skip(self), fields(appeal_id = %id))]
    async fn update_status(&self, id: &AppealId, status: AppealStatus) -> RepoResult<()> {
        match self.primary.update_status(id, status).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => self.fallback.update_status(id, status).await,
            Err(e) if e.is_infrastructure() => {
                warn!(
                    primary = self.primary.backend(),
                    error = %e,
                    "Primary store unavailable, updating fallback"
                );
                self.fallback.update_status(id, status).await
            }
            Err(e) => Err(e),
        }
    }
}

/// Combine both stores' lists, newest first
///
/// A record present in both keeps the primary's copy.
fn merge_newest_first(primary: Vec<Appeal>, fallback: Vec<Appeal>) -> Vec<Appeal> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Appeal> = primary
        .into_iter()
        .chain(fallback)
        .filter(|appeal| seen.insert(appeal.id.clone()))
        .collect();
    merged.sort_by(|a, b| {
        b.submitted_at
            .cmp(&a.submitted_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    merged
}
