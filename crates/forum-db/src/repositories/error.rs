//! Error handling utilities for repositories

use forum_core::error::DomainError;
use forum_core::value_objects::{ReplyId, ThreadId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Convert an insert/update error, surfacing rejected references distinctly
///
/// Inserts rely on the store's foreign keys instead of checking that the
/// author and parent exist first.
pub fn map_write_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
            let detail = db_err
                .constraint()
                .map_or_else(|| db_err.message().to_string(), ToString::to_string);
            return DomainError::ConstraintViolation(detail);
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "thread not found" error
pub fn thread_not_found(id: ThreadId) -> DomainError {
    DomainError::ThreadNotFound(id)
}

/// Create a "reply not found" error
pub fn reply_not_found(id: ReplyId) -> DomainError {
    DomainError::ReplyNotFound(id)
}
