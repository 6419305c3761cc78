//! Appeal entity <-> model mapper

use appeal_core::{Appeal, AppealId, DomainError};

use crate::models::{AppealModel, AppealRecord};

fn corrupt_row(id: &str, what: impl std::fmt::Display) -> DomainError {
    DomainError::DatabaseError(format!("corrupt appeal row {id}: {what}"))
}

/// Convert AppealModel to Appeal entity
impl TryFrom<AppealModel> for Appeal {
    type Error = DomainError;

    fn try_from(model: AppealModel) -> Result<Self, Self::Error> {
        let id = AppealId::parse(&model.id).map_err(|e| corrupt_row(&model.id, e))?;
        let ban_reason = model
            .ban_reason
            .parse()
            .map_err(|e| corrupt_row(&model.id, e))?;
        let status = model
            .status
            .parse()
            .map_err(|e| corrupt_row(&model.id, e))?;

        Ok(Appeal {
            id,
            username: model.username,
            discord_id: model.discord_id,
            email: model.email,
            ban_reason,
            appeal_reason: model.appeal_reason,
            additional_info: model.additional_info,
            submitted_at: model.submitted_at,
            status,
        })
    }
}

impl From<AppealRecord> for Appeal {
    fn from(record: AppealRecord) -> Self {
        Appeal {
            id: record.id,
            username: record.username,
            discord_id: record.discord_id,
            email: record.email,
            ban_reason: record.ban_reason,
            appeal_reason: record.appeal_reason,
            additional_info: record.additional_info,
            submitted_at: record.submitted_at,
            status: record.status,
        }
    }
}

impl From<&Appeal> for AppealRecord {
    fn from(appeal: &Appeal) -> Self {
        AppealRecord {
            id: appeal.id.clone(),
            username: appeal.username.clone(),
            discord_id: appeal.discord_id.clone(),
            email: appeal.email.clone(),
            ban_reason: appeal.ban_reason,
            appeal_reason: appeal.appeal_reason.clone(),
            additional_info: appeal.additional_info.clone(),
            submitted_at: appeal.submitted_at,
            status: appeal.status,
        }
    }
}

/// Column values for inserting an appeal
pub struct AppealInsert<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub discord_id: &'a str,
    pub email: &'a str,
    pub ban_reason: &'static str,
    pub appeal_reason: &'a str,
    pub additional_info: Option<&'a str>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub status: &'static str,
}

impl<'a> AppealInsert<'a> {
    pub fn new(appeal: &'a Appeal) -> Self {
        Self {
            id: appeal.id.as_str(),
            username: &appeal.username,
            discord_id: &appeal.discord_id,
            email: &appeal.email,
            ban_reason: appeal.ban_reason.as_str(),
            appeal_reason: &appeal.appeal_reason,
            additional_info: appeal.additional_info.as_deref(),
            submitted_at: appeal.submitted_at,
            status: appeal.status.as_str(),
        }
    }
}
