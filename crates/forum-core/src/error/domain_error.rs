//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ReplyId, ThreadId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Thread not found: {0}")]
    ThreadNotFound(ThreadId),

    #[error("Reply not found: {0}")]
    ReplyNotFound(ReplyId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// The store rejected a write, e.g. a foreign key pointing nowhere
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ThreadNotFound(_) | Self::ReplyNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this came from the store or the runtime rather than the caller
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::ConstraintViolation(_) | Self::DatabaseError(_) | Self::InternalError(_)
        )
    }
}
