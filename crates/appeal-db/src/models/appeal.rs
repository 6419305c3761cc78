//! Appeal storage models

use appeal_core::{AppealId, AppealStatus, BanReason};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for the appeals table
#[derive(Debug, Clone, FromRow)]
pub struct AppealModel {
    pub id: String,
    pub username: String,
    pub discord_id: String,
    pub email: String,
    pub ban_reason: String,
    pub appeal_reason: String,
    pub additional_info: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: String,
}

/// JSON document stored in the local fallback list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealRecord {
    pub id: AppealId,
    pub username: String,
    pub discord_id: String,
    pub email: String,
    pub ban_reason: BanReason,
    pub appeal_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: AppealStatus,
}
