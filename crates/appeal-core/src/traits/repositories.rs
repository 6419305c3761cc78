//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. A primary and a fallback backend both
//! implement [`AppealRepository`], so either can be swapped or composed.

use async_trait::async_trait;

use crate::entities::{Appeal, AppealStatus};
use crate::error::DomainError;
use crate::value_objects::AppealId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait AppealRepository: Send + Sync {
    /// Short backend name used in logs
    fn backend(&self) -> &'static str;

    /// Persist a new appeal
    async fn create(&self, appeal: &Appeal) -> RepoResult<()>;

    /// List all appeals, most recently submitted first
    async fn list(&self) -> RepoResult<Vec<Appeal>>;

    /// Find an appeal by ID
    async fn find_by_id(&self, id: &AppealId) -> RepoResult<Option<Appeal>>;

    /// Apply a review decision to the stored appeal
    ///
    /// The check against the stored status and the write happen as one step,
    /// so of two concurrent decisions only one succeeds.
    ///
    /// Returns `DomainError::AppealNotFound` if no such appeal exists and
    /// `DomainError::InvalidStatusTransition` if the stored status does not
    /// allow `status`.
    async fn update_status(&self, id: &AppealId, status: AppealStatus) -> RepoResult<()>;
}
