//! Tables and invariants of the in-memory store

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Utc;
use uuid::Uuid;

use jobs_core::engagement::ToggleOutcome;
use jobs_core::entities::{Bookmark, Comment, JobPosting, Like, Session, Share, User};
use jobs_core::error::DomainError;
use jobs_core::traits::RepoResult;
use jobs_core::value_objects::{BookmarkId, CommentId, JobId, LikeId, UserId};

#[derive(Debug)]
pub(super) struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

/// Relations keyed by (user, job)
#[derive(Debug, Clone, Copy)]
pub(super) enum Pair {
    Like,
    Bookmark,
}

#[derive(Debug, Default)]
pub(super) struct State {
    last_id: i64,
    pub users: BTreeMap<UserId, StoredUser>,
    pub jobs: BTreeMap<JobId, JobPosting>,
    pub likes: Vec<Like>,
    pub comments: BTreeMap<CommentId, Comment>,
    pub shares: Vec<Share>,
    pub bookmarks: Vec<Bookmark>,
    pub sessions: HashMap<Uuid, Session>,
}

impl State {
    pub fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    pub fn require_job(&self, job_id: JobId) -> RepoResult<()> {
        if self.jobs.contains_key(&job_id) {
            Ok(())
        } else {
            Err(DomainError::JobNotFound(job_id))
        }
    }

    pub fn require_user(&self, user_id: UserId) -> RepoResult<()> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(DomainError::UserNotFound(user_id))
        }
    }

    /// Referential checks for a row attached to a job and maybe a user
    pub fn require_parents(&self, job_id: JobId, user_id: Option<UserId>) -> RepoResult<()> {
        self.require_job(job_id)?;
        user_id.map_or(Ok(()), |user_id| self.require_user(user_id))
    }

    pub fn pair_exists(&self, pair: Pair, user_id: UserId, job_id: JobId) -> bool {
        match pair {
            Pair::Like => self
                .likes
                .iter()
                .any(|l| l.user_id == Some(user_id) && l.job_id == job_id),
            Pair::Bookmark => self
                .bookmarks
                .iter()
                .any(|b| b.user_id == user_id && b.job_id == job_id),
        }
    }

    pub fn pair_insert(&mut self, pair: Pair, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        self.require_parents(job_id, Some(user_id))?;
        if self.pair_exists(pair, user_id, job_id) {
            return Ok(false);
        }

        let id = self.next_id();
        let created_at = Utc::now();
        match pair {
            Pair::Like => self.likes.push(Like {
                id: LikeId::new(id),
                job_id,
                user_id: Some(user_id),
                created_at,
            }),
            Pair::Bookmark => self.bookmarks.push(Bookmark {
                id: BookmarkId::new(id),
                user_id,
                job_id,
                created_at,
            }),
        }
        Ok(true)
    }

    pub fn pair_remove(&mut self, pair: Pair, user_id: UserId, job_id: JobId) -> bool {
        match pair {
            Pair::Like => {
                let before = self.likes.len();
                self.likes
                    .retain(|l| !(l.user_id == Some(user_id) && l.job_id == job_id));
                self.likes.len() < before
            }
            Pair::Bookmark => {
                let before = self.bookmarks.len();
                self.bookmarks
                    .retain(|b| !(b.user_id == user_id && b.job_id == job_id));
                self.bookmarks.len() < before
            }
        }
    }

    pub fn pair_toggle(&mut self, pair: Pair, user_id: UserId, job_id: JobId) -> RepoResult<ToggleOutcome> {
        self.require_parents(job_id, Some(user_id))?;
        if self.pair_remove(pair, user_id, job_id) {
            return Ok(ToggleOutcome::Removed);
        }
        self.pair_insert(pair, user_id, job_id)?;
        Ok(ToggleOutcome::Created)
    }

    pub fn pair_marked(&self, pair: Pair, user_id: UserId, job_ids: &[JobId]) -> HashSet<JobId> {
        job_ids
            .iter()
            .copied()
            .filter(|job_id| self.pair_exists(pair, user_id, *job_id))
            .collect()
    }

    /// Remove a job and everything attached to it
    pub fn cascade_job(&mut self, job_id: JobId) -> bool {
        if self.jobs.remove(&job_id).is_none() {
            return false;
        }
        self.likes.retain(|l| l.job_id != job_id);
        self.comments.retain(|_, c| c.job_id != job_id);
        self.shares.retain(|s| s.job_id != job_id);
        self.bookmarks.retain(|b| b.job_id != job_id);
        true
    }

    /// Remove a user and everything they own; anonymous rows stay
    pub fn cascade_user(&mut self, user_id: UserId) -> bool {
        if self.users.remove(&user_id).is_none() {
            return false;
        }
        self.likes.retain(|l| l.user_id != Some(user_id));
        self.shares.retain(|s| s.user_id != Some(user_id));
        self.comments.retain(|_, c| c.user_id != user_id);
        self.bookmarks.retain(|b| b.user_id != user_id);
        self.sessions.retain(|_, s| s.user_id != user_id);
        true
    }
}

/// Count rows per job, limited to `job_ids`
pub(super) fn count_for(job_ids: &[JobId], rows: impl Iterator<Item = JobId>) -> HashMap<JobId, i64> {
    let wanted: HashSet<JobId> = job_ids.iter().copied().collect();
    let mut counts = HashMap::new();
    for job_id in rows.filter(|id| wanted.contains(id)) {
        *counts.entry(job_id).or_insert(0) += 1;
    }
    counts
}
