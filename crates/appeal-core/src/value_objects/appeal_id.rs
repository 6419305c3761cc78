//! Appeal ID - opaque, time-seeded unique identifier
//!
//! Format: `appeal_<unix millis>_<9 base-36 characters>`.
//! IDs read back from a store are treated as opaque and only checked for
//! basic sanity, so records written by older tooling still load.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique identifier of an appeal
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppealId(String);

impl AppealId {
    /// Prefix of every generated ID
    pub const PREFIX: &'static str = "appeal_";

    /// Length of the random suffix
    pub const SUFFIX_LEN: usize = 9;

    /// Maximum accepted length when parsing
    pub const MAX_LEN: usize = 64;

    /// Generate a new ID seeded with the current time plus a random suffix
    pub fn generate() -> Self {
        const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

        let mut rng = rand::thread_rng();
        let suffix: String = (0..Self::SUFFIX_LEN)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();

        Self(format!(
            "{}{}_{}",
            Self::PREFIX,
            Utc::now().timestamp_millis(),
            suffix
        ))
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, AppealIdParseError> {
        if s.is_empty() {
            return Err(AppealIdParseError::Empty);
        }
        if s.len() > Self::MAX_LEN {
            return Err(AppealIdParseError::TooLong);
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppealIdParseError::InvalidCharacter);
        }
        Ok(Self(s.to_string()))
    }

    /// Borrow the inner string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Millisecond timestamp embedded in a generated ID, if present
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0
            .strip_prefix(Self::PREFIX)?
            .split('_')
            .next()?
            .parse()
            .ok()
    }
}

/// Error when parsing an AppealId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppealIdParseError {
    #[error("appeal id is empty")]
    Empty,

    #[error("appeal id is too long")]
    TooLong,

    #[error("appeal id contains an invalid character")]
    InvalidCharacter,
}

impl fmt::Display for AppealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppealId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for AppealId {
    type Err = AppealIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppealId::parse(s)
    }
}

impl From<AppealId> for String {
    fn from(id: AppealId) -> Self {
        id.0
    }
}

impl Serialize for AppealId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AppealId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        AppealId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
