//! PostgreSQL implementation of LikeRepository

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobs_core::engagement::ToggleOutcome;
use jobs_core::entities::Like;
use jobs_core::traits::{LikeRepository, RepoResult, ToggleRelation};
use jobs_core::value_objects::{JobId, UserId};

use crate::mappers::{counts_to_map, ids_to_raw};
use crate::models::{JobCountModel, LikeModel};

use super::error::{map_db_error, map_reference_violation};
use super::toggle::PairTable;

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
    pairs: PairTable,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            pairs: PairTable::new("likes"),
        }
    }
}

#[async_trait]
impl ToggleRelation for PgLikeRepository {
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

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn add_anonymous(&self, job_id: JobId) -> RepoResult<Like> {
        let row = sqlx::query_as::<_, LikeModel>(
            r"
            INSERT INTO likes (user_id, job_id)
            VALUES (NULL, $1)
            RETURNING id, user_id, job_id, created_at
            ",
        )
        .bind(job_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, job_id, None))?;

        Ok(Like::from(row))
    }

    #[instrument(skip(self, job_ids), fields(jobs = job_ids.len()))]
    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>> {
        if job_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, JobCountModel>(
            r"
            SELECT job_id, COUNT(*) AS count
            FROM likes
            WHERE job_id = ANY($1)
            GROUP BY job_id
            ",
        )
        .bind(ids_to_raw(job_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(counts_to_map(rows))
    }
}
