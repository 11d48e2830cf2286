//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Shoutout not found: {0}")]
    ShoutoutNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Shoutout message must not be empty")]
    EmptyMessage,

    #[error("Comment text must not be empty")]
    EmptyComment,

    #[error("Unknown reaction kind: {0}")]
    UnknownReactionKind(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists: {0}")]
    UserAlreadyExists(Snowflake),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ShoutoutNotFound(_) => "UNKNOWN_SHOUTOUT",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::EmptyComment => "EMPTY_COMMENT",
            Self::UnknownReactionKind(_) => "UNKNOWN_REACTION_KIND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ShoutoutNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyMessage
                | Self::EmptyComment
                | Self::UnknownReactionKind(_)
                | Self::ValidationError(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UserAlreadyExists(_))
    }
}
