//! Repository trait implementations for the in-memory store

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use jobs_core::engagement::ToggleOutcome;
use jobs_core::entities::{
    Comment, JobCategory, JobPosting, Like, NewJobPosting, NewUser, Session, Share,
    User,
};
use jobs_core::error::DomainError;
use jobs_core::traits::{
    BookmarkRepository, CommentRepository, JobRepository, LikeRepository, RepoResult,
    SessionRepository, ShareRepository, ToggleRelation, UserRepository,
};
use jobs_core::value_objects::{CommentId, JobId, LikeId, ShareId, UserId};

use super::state::{count_for, Pair, StoredUser};
use super::{MemoryBookmarks, MemoryLikes, MemoryStore};

// ============================================================================
// Jobs
// ============================================================================

#[async_trait]
impl JobRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: JobId) -> RepoResult<Option<JobPosting>> {
        Ok(self.state.read().jobs.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self, category: Option<JobCategory>) -> RepoResult<Vec<JobPosting>> {
        let state = self.state.read();
        let mut jobs: Vec<JobPosting> = state
            .jobs
            .values()
            .filter(|job| category.is_none_or(|c| job.category == c))
            .cloned()
            .collect();
        jobs.sort_unstable_by(|a, b| b.posted_at.cmp(&a.posted_at).then(b.id.cmp(&a.id)));
        Ok(jobs)
    }

    #[instrument(skip(self, job), fields(title = %job.title))]
    async fn create(&self, job: &NewJobPosting) -> RepoResult<JobPosting> {
        let mut state = self.state.write();
        let posting = JobPosting {
            id: JobId::new(state.next_id()),
            category: job.category,
            title: job.title.clone(),
            organization: job.organization.clone(),
            location: job.location.clone(),
            vacancies: job.vacancies,
            last_date: job.last_date,
            description: job.description.clone(),
            posted_at: Utc::now(),
            job_link: job.job_link.clone(),
        };
        state.jobs.insert(posting.id, posting.clone());
        Ok(posting)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: JobId) -> RepoResult<()> {
        if self.state.write().cascade_job(id) {
            Ok(())
        } else {
            Err(DomainError::JobNotFound(id))
        }
    }
}

// ============================================================================
// Likes
// ============================================================================

#[async_trait]
impl ToggleRelation for MemoryLikes {
    async fn insert_if_absent(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        self.0.state.write().pair_insert(Pair::Like, user_id, job_id)
    }

    async fn remove(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        Ok(self.0.state.write().pair_remove(Pair::Like, user_id, job_id))
    }

    async fn exists(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        Ok(self.0.state.read().pair_exists(Pair::Like, user_id, job_id))
    }

    async fn marked_jobs(&self, user_id: UserId, job_ids: &[JobId]) -> RepoResult<HashSet<JobId>> {
        Ok(self.0.state.read().pair_marked(Pair::Like, user_id, job_ids))
    }

    #[instrument(skip(self))]
    async fn toggle(&self, user_id: UserId, job_id: JobId) -> RepoResult<ToggleOutcome> {
        self.0.state.write().pair_toggle(Pair::Like, user_id, job_id)
    }
}

#[async_trait]
impl LikeRepository for MemoryLikes {
    #[instrument(skip(self))]
    async fn add_anonymous(&self, job_id: JobId) -> RepoResult<Like> {
        let mut state = self.0.state.write();
        state.require_job(job_id)?;
        let like = Like {
            id: LikeId::new(state.next_id()),
            job_id,
            user_id: None,
            created_at: Utc::now(),
        };
        state.likes.push(like.clone());
        Ok(like)
    }

    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>> {
        let state = self.0.state.read();
        Ok(count_for(job_ids, state.likes.iter().map(|l| l.job_id)))
    }
}

// ============================================================================
// Bookmarks
// ============================================================================

#[async_trait]
impl ToggleRelation for MemoryBookmarks {
    async fn insert_if_absent(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        self.0.state.write().pair_insert(Pair::Bookmark, user_id, job_id)
    }

    async fn remove(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        Ok(self.0.state.write().pair_remove(Pair::Bookmark, user_id, job_id))
    }

    async fn exists(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        Ok(self.0.state.read().pair_exists(Pair::Bookmark, user_id, job_id))
    }

    async fn marked_jobs(&self, user_id: UserId, job_ids: &[JobId]) -> RepoResult<HashSet<JobId>> {
        Ok(self.0.state.read().pair_marked(Pair::Bookmark, user_id, job_ids))
    }

    #[instrument(skip(self))]
    async fn toggle(&self, user_id: UserId, job_id: JobId) -> RepoResult<ToggleOutcome> {
        self.0.state.write().pair_toggle(Pair::Bookmark, user_id, job_id)
    }
}

impl BookmarkRepository for MemoryBookmarks {}

// ============================================================================
// Comments
// ============================================================================

#[async_trait]
impl CommentRepository for MemoryStore {
    #[instrument(skip(self, content))]
    async fn create(&self, job_id: JobId, user_id: UserId, content: &str) -> RepoResult<Comment> {
        let mut state = self.state.write();
        state.require_parents(job_id, Some(user_id))?;
        let comment = Comment {
            id: CommentId::new(state.next_id()),
            job_id,
            user_id,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        state.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        Ok(self.state.read().comments.get(&id).cloned())
    }

    async fn find_by_job(&self, job_id: JobId) -> RepoResult<Vec<Comment>> {
        // BTreeMap iteration is id order, which is insertion order
        Ok(self
            .state
            .read()
            .comments
            .values()
            .filter(|c| c.job_id == job_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<bool> {
        Ok(self.state.write().comments.remove(&id).is_some())
    }

    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>> {
        let state = self.state.read();
        Ok(count_for(job_ids, state.comments.values().map(|c| c.job_id)))
    }
}

// ============================================================================
// Shares
// ============================================================================

#[async_trait]
impl ShareRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn create(&self, job_id: JobId, user_id: Option<UserId>, platform: &str) -> RepoResult<Share> {
        let mut state = self.state.write();
        state.require_parents(job_id, user_id)?;
        let share = Share {
            id: ShareId::new(state.next_id()),
            job_id,
            user_id,
            platform: platform.to_string(),
            created_at: Utc::now(),
        };
        state.shares.push(share.clone());
        Ok(share)
    }

    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>> {
        let state = self.state.read();
        Ok(count_for(job_ids, state.shares.iter().map(|s| s.job_id)))
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.state.read().users.get(&id).map(|u| u.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .find(|u| u.user.email == email)
            .map(|u| u.user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.state.read().users.values().any(|u| u.user.email == email))
    }

    #[instrument(skip(self, user, password_hash), fields(email = %user.email))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut state = self.state.write();
        if state.users.values().any(|u| u.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let created = User {
            id: UserId::new(state.next_id()),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_active: true,
            is_staff: user.is_staff,
            date_joined: Utc::now(),
        };
        state.users.insert(
            created.id,
            StoredUser {
                user: created.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(created)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self
            .state
            .read()
            .users
            .get(&id)
            .map(|u| u.password_hash.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        if self.state.write().cascade_user(id) {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(id))
        }
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create(&self, session: &Session) -> RepoResult<()> {
        let mut state = self.state.write();
        state.require_user(session.user_id)?;
        state.sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_active(&self, session_id: Uuid) -> RepoResult<Option<Session>> {
        Ok(self
            .state
            .read()
            .sessions
            .get(&session_id)
            .filter(|s| s.is_active())
            .cloned())
    }

    async fn revoke(&self, session_id: Uuid) -> RepoResult<bool> {
        let mut state = self.state.write();
        match state.sessions.get_mut(&session_id) {
            Some(session) if session.is_active() => {
                session.revoked_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<u64> {
        let now = Utc::now();
        let mut revoked = 0;
        for session in self.state.write().sessions.values_mut() {
            if session.user_id == user_id && session.revoked_at.is_none() {
                session.revoked_at = Some(now);
                revoked += 1;
            }
        }
        Ok(revoked)
    }
}
