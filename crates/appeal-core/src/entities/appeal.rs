//! Appeal entity - a request to reverse a ban decision

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::AppealId;

/// Reason the player was banned, as selected on the appeal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BanReason {
    Hacking,
    Toxicity,
    Scamming,
    Exploiting,
    Advertising,
    Inappropriate,
    BanEvasion,
    Other,
}

impl BanReason {
    /// Every accepted ban reason, in form order
    pub const ALL: [BanReason; 8] = [
        Self::Hacking,
        Self::Toxicity,
        Self::Scamming,
        Self::Exploiting,
        Self::Advertising,
        Self::Inappropriate,
        Self::BanEvasion,
        Self::Other,
    ];

    /// Wire / storage value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hacking => "hacking",
            Self::Toxicity => "toxicity",
            Self::Scamming => "scamming",
            Self::Exploiting => "exploiting",
            Self::Advertising => "advertising",
            Self::Inappropriate => "inappropriate",
            Self::BanEvasion => "ban-evasion",
            Self::Other => "other",
        }
    }

    /// Human readable label shown to staff
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hacking => "Hacking / Cheating",
            Self::Toxicity => "Toxicity / Harassment",
            Self::Scamming => "Scamming",
            Self::Exploiting => "Bug Exploiting",
            Self::Advertising => "Advertising",
            Self::Inappropriate => "Inappropriate Content",
            Self::BanEvasion => "Ban Evasion",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for BanReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BanReason {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| DomainError::InvalidBanReason(s.to_string()))
    }
}

/// Review status of an appeal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppealStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl AppealStatus {
    /// Wire / storage value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }

    /// Whether a review decision has been made
    #[must_use]
    pub fn is_final(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Only pending appeals can be decided, and only to approved or denied
    #[must_use]
    pub fn can_transition_to(self, next: AppealStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Denied)
        )
    }
}

impl fmt::Display for AppealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppealStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Validated, normalized form input for a new appeal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppeal {
    pub username: String,
    pub discord_id: String,
    pub email: String,
    pub ban_reason: BanReason,
    pub appeal_reason: String,
    pub additional_info: Option<String>,
}

/// Appeal entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appeal {
    pub id: AppealId,
    pub username: String,
    pub discord_id: String,
    pub email: String,
    pub ban_reason: BanReason,
    pub appeal_reason: String,
    pub additional_info: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: AppealStatus,
}

impl Appeal {
    /// Create a pending appeal with a fresh ID and submission time
    #[must_use]
    pub fn create(input: NewAppeal) -> Self {
        Self {
            id: AppealId::generate(),
            username: input.username,
            discord_id: input.discord_id,
            email: input.email,
            ban_reason: input.ban_reason,
            appeal_reason: input.appeal_reason,
            additional_info: input.additional_info,
            submitted_at: Utc::now(),
            status: AppealStatus::Pending,
        }
    }

    /// Apply a review decision
    pub fn transition_to(&mut self, next: AppealStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
