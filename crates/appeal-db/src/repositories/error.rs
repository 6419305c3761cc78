//! Error handling utilities for repositories

use appeal_core::{AppealId, DomainError};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Convert a local filesystem error to DomainError
pub fn map_io_error(context: &str, e: std::io::Error) -> DomainError {
    DomainError::StorageError(format!("{context}: {e}"))
}

/// Create an "appeal not found" error
pub fn appeal_not_found(id: &AppealId) -> DomainError {
    DomainError::AppealNotFound(id.to_string())
}
