//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::EventId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    /// The identifier string did not parse; treated the same as an absent
    /// record, not as a separate error class
    #[error("Event not found: {0}")]
    MalformedEventId(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Image is required for the event")]
    MissingImage,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists")]
    EmailAlreadyExists,

    #[error("User is already registered for this event")]
    AlreadyRegistered,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Image upload failed: {0}")]
    UploadFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EventNotFound(_) | Self::MalformedEventId(_) => "UNKNOWN_EVENT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingImage => "IMAGE_REQUIRED",
            Self::EmailAlreadyExists => "USER_ALREADY_EXISTS",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",
            Self::UploadFailed(_) => "UPLOAD_FAILED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_) | Self::MalformedEventId(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::MissingImage)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::AlreadyRegistered)
    }
}
