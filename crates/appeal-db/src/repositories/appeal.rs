//! PostgreSQL implementation of AppealRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use appeal_core::traits::{AppealRepository, RepoResult};
use appeal_core::{Appeal, AppealId, AppealStatus, DomainError};

use crate::mappers::AppealInsert;
use crate::models::AppealModel;

use super::error::{appeal_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of AppealRepository
#[derive(Clone)]
pub struct PgAppealRepository {
    pool: PgPool,
}

impl PgAppealRepository {
    /// Create a new PgAppealRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AppealRepository for PgAppealRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    #[instrument(skip(self, appeal), fields(appeal_id = %appeal.id))]
    async fn create(&self, appeal: &Appeal) -> RepoResult<()> {
        let insert = AppealInsert::new(appeal);

        sqlx::query(
            r"
            INSERT INTO appeals (
                id, username, discord_id, email, ban_reason,
                appeal_reason, additional_info, submitted_at, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(insert.id)
        .bind(insert.username)
        .bind(insert.discord_id)
        .bind(insert.email)
        .bind(insert.ban_reason)
        .bind(insert.appeal_reason)
        .bind(insert.additional_info)
        .bind(insert.submitted_at)
        .bind(insert.status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::AppealAlreadyExists(insert.id.to_string()))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Appeal>> {
        let rows = sqlx::query_as::<_, AppealModel>(
            r"
            SELECT id, username, discord_id, email, ban_reason,
                   appeal_reason, additional_info, submitted_at, status
            FROM appeals
            ORDER BY submitted_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appeal::try_from).collect()
    }

    #[instrument(skip(self), fields(appeal_id = %id))]
    async fn find_by_id(&self, id: &AppealId) -> RepoResult<Option<Appeal>> {
        let row = sqlx::query_as::<_, AppealModel>(
            r"
            SELECT id, username, discord_id, email, ban_reason,
                   appeal_reason, additional_info, submitted_at, status
            FROM appeals
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Appeal::try_from).transpose()
    }

    #[instrument(skip(self), fields(appeal_id = %id))]
    async fn update_status(&self, id: &AppealId, status: AppealStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE appeals SET status = $2 WHERE id = $1 AND status = $3
            ",
        )
        .bind(id.as_str())
        .bind(status.as_str())
        .bind(AppealStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Nothing matched: either the appeal is missing or already decided
        let current: Option<String> =
            sqlx::query_scalar("SELECT status FROM appeals WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        match current {
            None => Err(appeal_not_found(id)),
            Some(current) => Err(DomainError::InvalidStatusTransition {
                from: current.parse()?,
                to: status,
            }),
        }
    }
}
