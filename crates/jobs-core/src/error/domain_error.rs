//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CommentId, JobId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Job posting not found: {0}")]
    JobNotFound(JobId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid email format")]
    InvalidEmail,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not comment author")]
    NotCommentAuthor,

    #[error("You're Not an Admin")]
    NotStaff,

    #[error("Account is inactive")]
    AccountInactive,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::JobNotFound(_) => "UNKNOWN_JOB",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::InvalidField { .. } => "INVALID_FIELD",
            Self::InvalidEmail => "INVALID_EMAIL",

            // Authorization
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotStaff => "NOT_STAFF",
            Self::AccountInactive => "ACCOUNT_INACTIVE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Field name for errors that concern a single input field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidField { field, .. } => Some(field),
            Self::InvalidEmail => Some("email"),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::JobNotFound(_) | Self::UserNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidField { .. } | Self::InvalidEmail)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotCommentAuthor | Self::NotStaff | Self::AccountInactive
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}
