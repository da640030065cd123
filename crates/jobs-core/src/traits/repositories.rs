//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every store stamps `posted_at`, `created_at`
//! and `date_joined` itself and hands back the stored record.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use uuid::Uuid;

use crate::engagement::ToggleOutcome;
use crate::entities::{
    Comment, JobCategory, JobPosting, Like, NewJobPosting, NewUser, Session, Share,
    User,
};
use crate::error::DomainError;
use crate::value_objects::{CommentId, JobId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Job Repository
// ============================================================================

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Find posting by ID
    async fn find_by_id(&self, id: JobId) -> RepoResult<Option<JobPosting>>;

    /// List postings, newest first (ties by id descending)
    async fn list(&self, category: Option<JobCategory>) -> RepoResult<Vec<JobPosting>>;

    /// Insert a posting; the store assigns id and posted_at
    async fn create(&self, job: &NewJobPosting) -> RepoResult<JobPosting>;

    /// Delete a posting and every interaction attached to it
    async fn delete(&self, id: JobId) -> RepoResult<()>;

    /// Check that a posting exists
    async fn exists(&self, id: JobId) -> RepoResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

// ============================================================================
// Toggle relations (likes and bookmarks)
// ============================================================================

/// A relation holding at most one row per (user, job) pair
#[async_trait]
pub trait ToggleRelation: Send + Sync {
    /// Insert the pair unless it already exists. Returns true when a row was created.
    /// A uniqueness conflict yields false instead of an error.
    async fn insert_if_absent(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool>;

    /// Remove the pair. Returns true when a row was deleted.
    async fn remove(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool>;

    /// Check whether the pair exists
    async fn exists(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool>;

    /// Subset of `job_ids` related to the user
    async fn marked_jobs(&self, user_id: UserId, job_ids: &[JobId])
        -> RepoResult<HashSet<JobId>>;

    /// Flip the pair between absent and present.
    ///
    /// When a concurrent toggle inserts first, this still reports `Created`:
    /// the row exists afterwards, which is the state the caller asked for.
    async fn toggle(&self, user_id: UserId, job_id: JobId) -> RepoResult<ToggleOutcome> {
        if self.remove(user_id, job_id).await? {
            return Ok(ToggleOutcome::Removed);
        }
        self.insert_if_absent(user_id, job_id).await?;
        Ok(ToggleOutcome::Created)
    }
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: ToggleRelation {
    /// Record an anonymous like; these are never deduplicated
    async fn add_anonymous(&self, job_id: JobId) -> RepoResult<Like>;

    /// Like counts for the given jobs; jobs without likes are omitted
    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>>;

    /// Like count for one job
    async fn count_for_job(&self, job_id: JobId) -> RepoResult<i64> {
        let counts = self.count_by_jobs(&[job_id]).await?;
        Ok(counts.get(&job_id).copied().unwrap_or(0))
    }
}

// ============================================================================
// Bookmark Repository
// ============================================================================

pub trait BookmarkRepository: ToggleRelation {}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment
    async fn create(&self, job_id: JobId, user_id: UserId, content: &str) -> RepoResult<Comment>;

    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// Comments on a job, oldest first
    async fn find_by_job(&self, job_id: JobId) -> RepoResult<Vec<Comment>>;

    /// Delete a comment. Returns true when a row was deleted.
    async fn delete(&self, id: CommentId) -> RepoResult<bool>;

    /// Comment counts for the given jobs; jobs without comments are omitted
    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>>;
}

// ============================================================================
// Share Repository
// ============================================================================

#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Record a share
    async fn create(
        &self,
        job_id: JobId,
        user_id: Option<UserId>,
        platform: &str,
    ) -> RepoResult<Share>;

    /// Share counts for the given jobs; jobs without shares are omitted
    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>>;

    /// Share count for one job
    async fn count_for_job(&self, job_id: JobId) -> RepoResult<i64> {
        let counts = self.count_by_jobs(&[job_id]).await?;
        Ok(counts.get(&job_id).copied().unwrap_or(0))
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a user; fails with `EmailAlreadyExists` on a duplicate email
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Delete a user together with their sessions and attributed interactions
    async fn delete(&self, id: UserId) -> RepoResult<()>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session
    async fn create(&self, session: &Session) -> RepoResult<()>;

    /// Find a session that is neither revoked nor expired
    async fn find_active(&self, session_id: Uuid) -> RepoResult<Option<Session>>;

    /// Revoke a session. Returns true when an active session was revoked.
    async fn revoke(&self, session_id: Uuid) -> RepoResult<bool>;

    /// Revoke every session of a user, returning how many were revoked
    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<u64>;
}
