//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Field names are camelCase to match the appeal form.

use appeal_core::{AppealStatus, BanReason};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Appeal Responses
// ============================================================================

/// A stored appeal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealResponse {
    pub id: String,
    pub username: String,
    pub discord_id: String,
    pub email: String,
    pub ban_reason: BanReason,
    pub ban_reason_label: &'static str,
    pub appeal_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: AppealStatus,
}

/// Result of a webhook relay
#[derive(Debug, Clone, Serialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

impl RelayResponse {
    pub fn delivered() -> Self {
        Self {
            success: true,
            message: "Appeal sent to Discord".to_string(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub fallback: String,
}

impl ReadinessResponse {
    /// Build a readiness report
    ///
    /// `database` is `None` when no primary store is configured. Submissions
    /// keep working while the fallback is usable, so a down database only
    /// degrades the service.
    pub fn ready(database: Option<bool>, fallback_healthy: bool) -> Self {
        let status = match (fallback_healthy, database) {
            (false, _) => "not_ready",
            (true, Some(false)) => "degraded",
            (true, _) => "ready",
        };

        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: match database {
                    Some(true) => "healthy",
                    Some(false) => "unhealthy",
                    None => "not_configured",
                }
                .to_string(),
                fallback: if fallback_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    /// Whether the service can accept submissions
    pub fn is_ready(&self) -> bool {
        self.status != "not_ready"
    }
}
