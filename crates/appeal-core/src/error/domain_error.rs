//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::AppealStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Appeal not found: {0}")]
    AppealNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid ban reason: {0}")]
    InvalidBanReason(String),

    #[error("Invalid appeal status: {0}")]
    InvalidStatus(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Cannot change appeal status from {from} to {to}")]
    InvalidStatusTransition {
        from: AppealStatus,
        to: AppealStatus,
    },

    #[error("Appeal already exists: {0}")]
    AppealAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::AppealNotFound(_) => "UNKNOWN_APPEAL",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidBanReason(_) => "INVALID_BAN_REASON",
            Self::InvalidStatus(_) => "INVALID_STATUS",

            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::AppealAlreadyExists(_) => "APPEAL_ALREADY_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AppealNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidBanReason(_) | Self::InvalidStatus(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::InvalidStatusTransition { .. } | Self::AppealAlreadyExists(_)
        )
    }

    /// Check if this error came from a storage backend
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::StorageError(_))
    }
}
