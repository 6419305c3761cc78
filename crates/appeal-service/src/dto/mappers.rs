//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use appeal_core::Appeal;

use super::responses::AppealResponse;

impl From<&Appeal> for AppealResponse {
    fn from(appeal: &Appeal) -> Self {
        Self {
            id: appeal.id.to_string(),
            username: appeal.username.clone(),
            discord_id: appeal.discord_id.clone(),
            email: appeal.email.clone(),
            ban_reason: appeal.ban_reason,
            ban_reason_label: appeal.ban_reason.label(),
            appeal_reason: appeal.appeal_reason.clone(),
            additional_info: appeal.additional_info.clone(),
            submitted_at: appeal.submitted_at,
            status: appeal.status,
        }
    }
}

impl From<Appeal> for AppealResponse {
    fn from(appeal: Appeal) -> Self {
        Self::from(&appeal)
    }
}
