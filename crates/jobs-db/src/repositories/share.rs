//! PostgreSQL implementation of ShareRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobs_core::entities::Share;
use jobs_core::traits::{RepoResult, ShareRepository};
use jobs_core::value_objects::{JobId, UserId};

use crate::mappers::{counts_to_map, ids_to_raw};
use crate::models::{JobCountModel, ShareModel};

use super::error::{map_db_error, map_reference_violation};

/// PostgreSQL implementation of ShareRepository
#[derive(Clone)]
pub struct PgShareRepository {
    pool: PgPool,
}

impl PgShareRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareRepository for PgShareRepository {
    #[instrument(skip(self))]
    async fn create(&self, job_id: JobId, user_id: Option<UserId>, platform: &str) -> RepoResult<Share> {
        let row = sqlx::query_as::<_, ShareModel>(
            r"
            INSERT INTO shares (user_id, job_id, platform)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, job_id, platform, created_at
            ",
        )
        .bind(user_id.map(UserId::into_inner))
        .bind(job_id.into_inner())
        .bind(platform)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, job_id, user_id))?;

        Ok(Share::from(row))
    }

    #[instrument(skip(self, job_ids), fields(jobs = job_ids.len()))]
    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>> {
        if job_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, JobCountModel>(
            r"
            SELECT job_id, COUNT(*) AS count
            FROM shares
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
