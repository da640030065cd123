//! Interaction records - likes, comments, shares and bookmarks attached to a job posting
//!
//! Every record belongs to exactly one posting and is removed with it. Likes and
//! shares may be anonymous; comments and bookmarks always carry a user.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{BookmarkId, CommentId, JobId, LikeId, ShareId, UserId};

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Maximum share platform label length in characters
pub const MAX_PLATFORM_LENGTH: usize = 50;

/// Like on a job posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: LikeId,
    pub job_id: JobId,
    /// `None` for an anonymous like
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

/// Comment left by a user on a job posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub job_id: JobId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Check if the given user wrote this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Share of a job posting to an external platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub id: ShareId,
    pub job_id: JobId,
    pub user_id: Option<UserId>,
    /// Free-text label such as "WhatsApp"; may be empty
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

/// Bookmark of a job posting by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub user_id: UserId,
    pub job_id: JobId,
    pub created_at: DateTime<Utc>,
}

/// Validate comment content, returning the trimmed text
pub fn validate_comment_content(content: &str) -> Result<String, DomainError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidField {
            field: "content",
            reason: "must not be empty".to_string(),
        });
    }
    if trimmed.chars().count() > MAX_COMMENT_LENGTH {
        return Err(DomainError::InvalidField {
            field: "content",
            reason: format!("must be at most {MAX_COMMENT_LENGTH} characters"),
        });
    }
    Ok(trimmed.to_string())
}

/// Validate a share platform label, returning the trimmed text
pub fn validate_share_platform(platform: &str) -> Result<String, DomainError> {
    let trimmed = platform.trim();
    if trimmed.chars().count() > MAX_PLATFORM_LENGTH {
        return Err(DomainError::InvalidField {
            field: "platform",
            reason: format!("must be at most {MAX_PLATFORM_LENGTH} characters"),
        });
    }
    Ok(trimmed.to_string())
}
