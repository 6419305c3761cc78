//! Appeal service
//!
//! Runs the submission pipeline (validate, persist, notify) and the
//! administrative review operations.

use appeal_core::{Appeal, AppealId, NewAppeal};
use tracing::{info, instrument, warn};

use crate::dto::{AppealResponse, SubmitAppealRequest, UpdateStatusRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Appeal service
pub struct AppealService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AppealService<'a> {
    /// Create a new AppealService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate, store, and announce a new appeal
    ///
    /// Invalid input is rejected before the store is touched. A notification
    /// failure is logged and does not change the outcome.
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: SubmitAppealRequest) -> ServiceResult<AppealResponse> {
        let input = request.into_new_appeal()?;
        let appeal = self.create_appeal(input).await?;

        if !self.ctx.notifier().notify(&appeal).await {
            warn!(appeal_id = %appeal.id, "Appeal stored but notification was not delivered");
        }

        Ok(AppealResponse::from(&appeal))
    }

    /// Assign identity and persist validated input
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_appeal(&self, input: NewAppeal) -> ServiceResult<Appeal> {
        let appeal = Appeal::create(input);

        self.ctx
            .appeal_repo()
            .create(&appeal)
            .await
            .map_err(ServiceError::from_store)?;

        info!(appeal_id = %appeal.id, ban_reason = %appeal.ban_reason, "Appeal submitted");
        Ok(appeal)
    }

    /// List all appeals, most recent first
    #[instrument(skip(self))]
    pub async fn list_appeals(&self) -> ServiceResult<Vec<AppealResponse>> {
        let appeals = self.ctx.appeal_repo().list().await?;
        Ok(appeals.iter().map(AppealResponse::from).collect())
    }

    /// Get appeal by ID
    #[instrument(skip(self))]
    pub async fn get_appeal(&self, id: &AppealId) -> ServiceResult<AppealResponse> {
        let appeal = self.get_appeal_entity(id).await?;
        Ok(AppealResponse::from(&appeal))
    }

    /// Get appeal entity by ID
    #[instrument(skip(self))]
    pub async fn get_appeal_entity(&self, id: &AppealId) -> ServiceResult<Appeal> {
        self.ctx
            .appeal_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Appeal", id.to_string()))
    }

    /// Record a review decision
    ///
    /// Only pending appeals can be approved or denied.
    #[instrument(skip(self, request), fields(status = %request.status))]
    pub async fn update_status(
        &self,
        id: &AppealId,
        request: UpdateStatusRequest,
    ) -> ServiceResult<AppealResponse> {
        let mut appeal = self.get_appeal_entity(id).await?;
        appeal.transition_to(request.status)?;

        self.ctx
            .appeal_repo()
            .update_status(&appeal.id, appeal.status)
            .await?;

        info!(appeal_id = %appeal.id, status = %appeal.status, "Appeal reviewed");
        Ok(AppealResponse::from(&appeal))
    }
}
