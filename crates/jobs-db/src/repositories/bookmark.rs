//! PostgreSQL implementation of BookmarkRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobs_core::engagement::ToggleOutcome;
use jobs_core::traits::{BookmarkRepository, RepoResult, ToggleRelation};
use jobs_core::value_objects::{JobId, UserId};

use super::toggle::PairTable;

/// PostgreSQL implementation of BookmarkRepository
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
    pairs: PairTable,
}

impl PgBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            pairs: PairTable::new("bookmarks"),
        }
    }
}

#[async_trait]
impl ToggleRelation for PgBookmarkRepository {
    #[instrument(skip(self))]
    async fn insert_if_absent(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        self.pairs.insert_if_absent(&self.pool, user_id, job_id).await
    }

    #[instrument(skip(self))]
    async fn remove(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        self.pairs.remove(&self.pool, user_id, job_id).await
    }

    #[instrument(skip(self))]
    async fn exists(&self, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        self.pairs.exists(&self.pool, user_id, job_id).await
    }

    #[instrument(skip(self, job_ids), fields(jobs = job_ids.len()))]
    async fn marked_jobs(&self, user_id: UserId, job_ids: &[JobId]) -> RepoResult<HashSet<JobId>> {
        self.pairs.marked_jobs(&self.pool, user_id, job_ids).await
    }

    #[instrument(skip(self))]
    async fn toggle(&self, user_id: UserId, job_id: JobId) -> RepoResult<ToggleOutcome> {
        self.pairs.toggle(&self.pool, user_id, job_id).await
    }
}

impl BookmarkRepository for PgBookmarkRepository {}
