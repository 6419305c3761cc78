//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; the ones with field rules also
//! implement `Validate`.

use std::borrow::Cow;

use appeal_core::{AppealStatus, BanReason, NewAppeal};
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

// ============================================================================
// Appeal Requests
// ============================================================================

/// Ban appeal form submission
///
/// Missing fields deserialize as empty strings so that every problem is
/// reported per field by validation rather than as a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitAppealRequest {
    #[serde(default)]
    #[validate(
        length(min = 3, max = 16, message = "Username must be 3-16 characters"),
        custom(function = "validate_username_charset")
    )]
    pub username: String,

    #[serde(default, rename = "discordId")]
    #[validate(length(min = 2, max = 100, message = "Discord ID must be 2-100 characters"))]
    pub discord_id: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, rename = "banReason")]
    #[validate(custom(function = "validate_ban_reason"))]
    pub ban_reason: String,

    #[serde(default, rename = "appealReason")]
    #[validate(length(min = 50, max = 2000, message = "Appeal reason must be 50-2000 characters"))]
    pub appeal_reason: String,

    #[serde(default, rename = "additionalInfo")]
    #[validate(length(max = 1000, message = "Additional info must be at most 1000 characters"))]
    pub additional_info: Option<String>,
}

impl SubmitAppealRequest {
    /// Trim every field and drop blank additional info
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            discord_id: self.discord_id.trim().to_string(),
            email: self.email.trim().to_string(),
            ban_reason: self.ban_reason.trim().to_string(),
            appeal_reason: self.appeal_reason.trim().to_string(),
            additional_info: self
                .additional_info
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// Normalize, validate, and convert into domain input
    pub fn into_new_appeal(self) -> Result<NewAppeal, ValidationErrors> {
        let request = self.normalized();
        request.validate()?;

        let ban_reason = request.ban_reason.parse::<BanReason>().map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add("banReason", ban_reason_error());
            errors
        })?;

        Ok(NewAppeal {
            username: request.username,
            discord_id: request.discord_id,
            email: request.email,
            ban_reason,
            appeal_reason: request.appeal_reason,
            additional_info: request.additional_info,
        })
    }
}

/// Administrative decision on an appeal
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(custom(function = "validate_decision"))]
    pub status: AppealStatus,
}

/// Appeal-shaped body accepted by the webhook relay
///
/// Fields are forwarded as given; the ban reason is shown with its label when
/// it is one of the known values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayAppealRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub discord_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub ban_reason: String,
    #[serde(default)]
    pub appeal_reason: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

// ============================================================================
// Rules
// ============================================================================

fn validate_username_charset(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        let mut err = ValidationError::new("username_charset");
        err.message = Some(Cow::from(
            "Username can only contain letters, numbers, and underscores",
        ));
        Err(err)
    }
}

fn validate_ban_reason(value: &str) -> Result<(), ValidationError> {
    if value.parse::<BanReason>().is_ok() {
        Ok(())
    } else {
        Err(ban_reason_error())
    }
}

fn ban_reason_error() -> ValidationError {
    let mut err = ValidationError::new("ban_reason");
    err.message = Some(Cow::from("Please select a ban reason"));
    err
}

fn validate_decision(status: &AppealStatus) -> Result<(), ValidationError> {
    if status.is_final() {
        Ok(())
    } else {
        let mut err = ValidationError::new("decision");
        err.message = Some(Cow::from("Status must be approved or denied"));
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitAppealRequest {
        SubmitAppealRequest {
            username: "Steve_01".to_string(),
            discord_id: "steve#0001".to_string(),
            email: "steve@example.com".to_string(),
            ban_reason: "hacking".to_string(),
            appeal_reason: "a".repeat(60),
            additional_info: None,
        }
    }

    fn rejected(request: SubmitAppealRequest) -> ValidationErrors {
        request.into_new_appeal().unwrap_err()
    }

    #[test]
    fn test_valid_request_converts() {
        let input = valid_request().into_new_appeal().unwrap();
        assert_eq!(input.username, "Steve_01");
        assert_eq!(input.ban_reason, BanReason::Hacking);
        assert_eq!(input.additional_info, None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let input = SubmitAppealRequest {
            username: "  Steve_01 ".to_string(),
            email: " steve@example.com\n".to_string(),
            ban_reason: " ban-evasion ".to_string(),
            additional_info: Some("   ".to_string()),
            ..valid_request()
        }
        .into_new_appeal()
        .unwrap();

        assert_eq!(input.username, "Steve_01");
        assert_eq!(input.email, "steve@example.com");
        assert_eq!(input.ban_reason, BanReason::BanEvasion);
        assert_eq!(input.additional_info, None);
    }

    #[test]
    fn test_username_rules() {
        for bad in ["ab", "a_very_long_username", "Steve 01", "steve-01", ""] {
            let errors = rejected(SubmitAppealRequest {
                username: bad.to_string(),
                ..valid_request()
            });
            assert!(errors.field_errors().contains_key("username"), "{bad}");
        }
    }

    #[test]
    fn test_email_rule() {
        let errors = rejected(SubmitAppealRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        });
        assert!(errors.field_errors().contains_key("email"));
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_appeal_reason_bounds() {
        let with_len = |n: usize| SubmitAppealRequest {
            appeal_reason: "x".repeat(n),
            ..valid_request()
        };

        assert!(with_len(49).into_new_appeal().is_err());
        assert!(with_len(50).into_new_appeal().is_ok());
        assert!(with_len(2000).into_new_appeal().is_ok());
        assert!(with_len(2001).into_new_appeal().is_err());
    }

    #[test]
    fn test_appeal_reason_counts_characters() {
        let input = SubmitAppealRequest {
            appeal_reason: "é".repeat(50),
            ..valid_request()
        };
        assert!(input.into_new_appeal().is_ok());
    }

    #[test]
    fn test_whitespace_only_required_field_rejected() {
        let result = SubmitAppealRequest {
            discord_id: "     ".to_string(),
            ..valid_request()
        }
        .into_new_appeal();
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_ban_reason_rejected() {
        for bad in ["", "griefing-ish", "HACKING"] {
            let result = SubmitAppealRequest {
                ban_reason: bad.to_string(),
                ..valid_request()
            }
            .into_new_appeal();
            assert!(result.is_err(), "{bad}");
        }
    }

    #[test]
    fn test_additional_info_limit() {
        let result = SubmitAppealRequest {
            additional_info: Some("i".repeat(1001)),
            ..valid_request()
        }
        .into_new_appeal();
        assert!(result.is_err());

        let input = SubmitAppealRequest {
            additional_info: Some(" kept ".to_string()),
            ..valid_request()
        }
        .into_new_appeal()
        .unwrap();
        assert_eq!(input.additional_info.as_deref(), Some("kept"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let request: SubmitAppealRequest =
            serde_json::from_str(r#"{"username": "Steve_01"}"#).unwrap();
        assert_eq!(request.email, "");
        assert!(request.into_new_appeal().is_err());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let request: SubmitAppealRequest = serde_json::from_value(serde_json::json!({
            "username": "Steve_01",
            "discordId": "steve#0001",
            "email": "steve@example.com",
            "banReason": "toxicity",
            "appealReason": "b".repeat(80),
            "additionalInfo": "extra"
        }))
        .unwrap();

        let input = request.into_new_appeal().unwrap();
        assert_eq!(input.discord_id, "steve#0001");
        assert_eq!(input.ban_reason, BanReason::Toxicity);
        assert_eq!(input.additional_info.as_deref(), Some("extra"));
    }

    #[test]
    fn test_update_status_requires_decision() {
        let approve: UpdateStatusRequest =
            serde_json::from_str(r#"{"status": "approved"}"#).unwrap();
        assert!(approve.validate().is_ok());

        let reset: UpdateStatusRequest = serde_json::from_str(r#"{"status": "pending"}"#).unwrap();
        assert!(reset.validate().is_err());

        assert!(serde_json::from_str::<UpdateStatusRequest>(r#"{"status": "maybe"}"#).is_err());
    }

    #[test]
    fn test_relay_request_accepts_partial_body() {
        let request: RelayAppealRequest = serde_json::from_str(
            r#"{"id": "appeal_1", "username": "Steve_01", "banReason": "custom reason"}"#,
        )
        .unwrap();
        assert_eq!(request.id.as_deref(), Some("appeal_1"));
        assert_eq!(request.ban_reason, "custom reason");
        assert!(request.appeal_reason.is_empty());
    }
}
