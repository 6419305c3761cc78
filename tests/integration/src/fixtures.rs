//! Test fixtures and data generators
//!
//! Provides reusable appeal payloads for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Appeal form submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAppeal {
    pub username: String,
    pub discord_id: String,
    pub email: String,
    pub ban_reason: String,
    pub appeal_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl SubmitAppeal {
    /// The canonical valid submission
    pub fn steve() -> Self {
        Self {
            username: "Steve_01".to_string(),
            discord_id: "steve#0001".to_string(),
            email: "steve@example.com".to_string(),
            ban_reason: "hacking".to_string(),
            appeal_reason: "I was using a texture pack that I did not know was disallowed on the server."
                .to_string(),
            additional_info: None,
        }
    }

    /// A valid submission with a username nobody else uses
    pub fn unique() -> Self {
        Self {
            username: format!("player_{}", unique_suffix()),
            ..Self::steve()
        }
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}

/// Status decision body
#[derive(Debug, Serialize)]
pub struct UpdateStatus {
    pub status: &'static str,
}

impl UpdateStatus {
    pub fn approved() -> Self {
        Self { status: "approved" }
    }

    pub fn denied() -> Self {
        Self { status: "denied" }
    }
}

/// Stored appeal as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealResponse {
    pub id: String,
    pub username: String,
    pub discord_id: String,
    pub email: String,
    pub ban_reason: String,
    pub ban_reason_label: String,
    pub appeal_reason: String,
    pub additional_info: Option<String>,
    pub status: String,
    pub submitted_at: String,
}

/// Webhook relay response
#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}
