//! Error handling utilities for repositories

use event_core::error::DomainError;
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

/// Check for unique and foreign-key violations with distinct outcomes
///
/// The attendee insert relies on both: a unique violation on the composite
/// key is a duplicate registration, a foreign-key violation means the
/// referenced event does not exist.
pub fn map_conditional_insert<U, M>(e: SqlxError, on_unique: U, on_missing_parent: M) -> DomainError
where
    U: FnOnce() -> DomainError,
    M: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return on_missing_parent();
        }
    }
    DomainError::DatabaseError(e.to_string())
}
