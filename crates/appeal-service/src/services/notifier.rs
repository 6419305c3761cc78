//! Chat webhook notifier
//!
//! Posts a Discord-style `{"content": ...}` message for each new appeal. The
//! destination URL is injected from configuration; without one, notification
//! is a successful no-op. Delivery problems are logged and reported through
//! the return value, never as an error.

use std::time::Duration;

use appeal_common::{AppError, WebhookConfig};
use appeal_core::{Appeal, BanReason};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::dto::RelayAppealRequest;

use super::error::{ServiceError, ServiceResult};

/// Discord rejects message content longer than this many characters
pub const MAX_CONTENT_CHARS: usize = 2000;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Fields shown in a webhook message
#[derive(Debug, Clone, Copy)]
pub struct AppealSummary<'a> {
    pub id: Option<&'a str>,
    pub username: &'a str,
    pub discord_id: &'a str,
    pub email: &'a str,
    pub ban_reason: &'a str,
    pub appeal_reason: &'a str,
    pub additional_info: Option<&'a str>,
}

impl<'a> From<&'a Appeal> for AppealSummary<'a> {
    fn from(appeal: &'a Appeal) -> Self {
        Self {
            id: Some(appeal.id.as_str()),
            username: &appeal.username,
            discord_id: &appeal.discord_id,
            email: &appeal.email,
            ban_reason: appeal.ban_reason.label(),
            appeal_reason: &appeal.appeal_reason,
            additional_info: appeal.additional_info.as_deref(),
        }
    }
}

impl<'a> From<&'a RelayAppealRequest> for AppealSummary<'a> {
    fn from(request: &'a RelayAppealRequest) -> Self {
        let ban_reason = request
            .ban_reason
            .parse::<BanReason>()
            .map_or(request.ban_reason.as_str(), |reason| reason.label());

        Self {
            id: request.id.as_deref(),
            username: &request.username,
            discord_id: &request.discord_id,
            email: &request.email,
            ban_reason,
            appeal_reason: &request.appeal_reason,
            additional_info: request.additional_info.as_deref().filter(|s| !s.is_empty()),
        }
    }
}

/// Render the message body, truncated to [`MAX_CONTENT_CHARS`]
pub fn format_message(summary: &AppealSummary<'_>) -> String {
    let mut content = format!(
        "🆕 **New Ban Appeal**\n\n\
         👤 Username: `{}`\n\
         🎮 Discord: `{}`\n\
         📧 Email: `{}`\n\
         ⛔ Ban Reason: {}\n",
        summary.username, summary.discord_id, summary.email, summary.ban_reason,
    );
    if let Some(id) = summary.id {
        content.push_str(&format!("📅 ID: `{id}`\n"));
    }
    content.push_str(&format!("\n💭 Appeal:\n{}", summary.appeal_reason));
    if let Some(info) = summary.additional_info {
        content.push_str(&format!("\n\n📝 Additional Info:\n{info}"));
    }

    truncate_chars(content, MAX_CONTENT_CHARS)
}

fn truncate_chars(content: String, max: usize) -> String {
    const ELLIPSIS: &str = "...";

    if content.chars().count() <= max {
        return content;
    }
    let keep = max - ELLIPSIS.len();
    let cut = content
        .char_indices()
        .nth(keep)
        .map_or(content.len(), |(idx, _)| idx);
    let mut truncated = content[..cut].to_string();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Outbound webhook client
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    url: Option<String>,
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// Create a notifier for `url`; `None` disables delivery
    pub fn new(url: Option<String>, timeout: Duration) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::internal(format!("webhook client: {e}")))?;

        Ok(Self { url, client })
    }

    pub fn from_config(config: &WebhookConfig) -> ServiceResult<Self> {
        Self::new(config.url.clone(), config.timeout())
    }

    /// A notifier with no destination
    pub fn disabled() -> Self {
        Self {
            url: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Announce a stored appeal
    ///
    /// Returns `true` when the message was delivered or no destination is
    /// configured. Only 200 and 204 responses count as delivered.
    #[instrument(skip(self, appeal), fields(appeal_id = %appeal.id))]
    pub async fn notify(&self, appeal: &Appeal) -> bool {
        let Some(url) = self.url.as_deref() else {
            debug!("No webhook configured, skipping notification");
            return true;
        };

        let content = format_message(&AppealSummary::from(appeal));
        match self.post(url, &content).await {
            Ok(status) if status == StatusCode::OK || status == StatusCode::NO_CONTENT => {
                info!("Appeal notification delivered");
                true
            }
            Ok(status) => {
                warn!(status = status.as_u16(), "Webhook rejected appeal notification");
                false
            }
            Err(e) => {
                error!(error = %e, "Webhook delivery failed");
                false
            }
        }
    }

    /// Forward an appeal-shaped body to the destination
    ///
    /// Unlike [`notify`](Self::notify), failures are returned so the caller
    /// can echo them: a missing destination, the destination's own error
    /// status, or a transport failure.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn relay(&self, request: &RelayAppealRequest) -> ServiceResult<()> {
        let url = self
            .url
            .as_deref()
            .ok_or(ServiceError::App(AppError::WebhookNotConfigured))?;

        let content = format_message(&AppealSummary::from(request));
        let status = self.post(url, &content).await.map_err(|e| {
            error!(error = %e, "Webhook relay failed");
            ServiceError::App(AppError::ExternalService(e.to_string()))
        })?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Webhook destination rejected relay");
            return Err(AppError::WebhookRejected {
                status: status.as_u16(),
            }
            .into());
        }

        info!("Appeal relayed to webhook");
        Ok(())
    }

    async fn post(&self, url: &str, content: &str) -> Result<StatusCode, reqwest::Error> {
        let response = self
            .client
            .post(url)
            .json(&WebhookPayload { content })
            .send()
            .await?;
        Ok(response.status())
    }
}
