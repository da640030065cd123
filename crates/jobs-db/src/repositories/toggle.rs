//! Shared SQL for (user, job) relations with a unique pair constraint
//!
//! Likes and bookmarks differ only in their table name, so the statements are
//! built once per table and reused by both repositories.

use std::collections::HashSet;

use sqlx::PgPool;

use jobs_core::engagement::ToggleOutcome;
use jobs_core::traits::RepoResult;
use jobs_core::value_objects::{JobId, UserId};

use crate::mappers::ids_to_raw;

use super::error::{map_db_error, map_reference_violation};

/// SQL statements for one pair table
#[derive(Debug, Clone)]
pub(crate) struct PairTable {
    insert: String,
    remove: String,
    exists: String,
    marked: String,
    toggle: String,
}

impl PairTable {
    pub(crate) fn new(table: &'static str) -> Self {
        Self {
            insert: format!(
                "INSERT INTO {table} (user_id, job_id) VALUES ($1, $2) \
                 ON CONFLICT (user_id, job_id) DO NOTHING RETURNING id"
            ),
            remove: format!("DELETE FROM {table} WHERE user_id = $1 AND job_id = $2"),
            exists: format!(
                "SELECT EXISTS(SELECT 1 FROM {table} WHERE user_id = $1 AND job_id = $2)"
            ),
            marked: format!(
                "SELECT job_id FROM {table} WHERE user_id = $1 AND job_id = ANY($2)"
            ),
            // One statement: delete the pair if present, otherwise insert it.
            // Both CTEs see the same snapshot, so exactly one branch acts.
            toggle: format!(
                "WITH removed AS ( \
                     DELETE FROM {table} WHERE user_id = $1 AND job_id = $2 RETURNING id \
                 ), inserted AS ( \
                     INSERT INTO {table} (user_id, job_id) \
                     SELECT $1, $2 WHERE NOT EXISTS (SELECT 1 FROM removed) \
                     ON CONFLICT (user_id, job_id) DO NOTHING RETURNING id \
                 ) \
                 SELECT EXISTS (SELECT 1 FROM removed)"
            ),
        }
    }

    pub(crate) async fn insert_if_absent(
        &self,
        pool: &PgPool,
        user_id: UserId,
        job_id: JobId,
    ) -> RepoResult<bool> {
        let inserted = sqlx::query_scalar::<_, i64>(&self.insert)
            .bind(user_id.into_inner())
            .bind(job_id.into_inner())
            .fetch_optional(pool)
            .await
            .map_err(|e| map_reference_violation(e, job_id, Some(user_id)))?;

        Ok(inserted.is_some())
    }

    pub(crate) async fn remove(&self, pool: &PgPool, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        let result = sqlx::query(&self.remove)
            .bind(user_id.into_inner())
            .bind(job_id.into_inner())
            .execute(pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    pub(crate) async fn exists(&self, pool: &PgPool, user_id: UserId, job_id: JobId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(&self.exists)
            .bind(user_id.into_inner())
            .bind(job_id.into_inner())
            .fetch_one(pool)
            .await
            .map_err(map_db_error)
    }

    pub(crate) async fn marked_jobs(
        &self,
        pool: &PgPool,
        user_id: UserId,
        job_ids: &[JobId],
    ) -> RepoResult<HashSet<JobId>> {
        if job_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = sqlx::query_scalar::<_, i64>(&self.marked)
            .bind(user_id.into_inner())
            .bind(ids_to_raw(job_ids))
            .fetch_all(pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(JobId::new).collect())
    }

    pub(crate) async fn toggle(
        &self,
        pool: &PgPool,
        user_id: UserId,
        job_id: JobId,
    ) -> RepoResult<ToggleOutcome> {
        let removed = sqlx::query_scalar::<_, bool>(&self.toggle)
            .bind(user_id.into_inner())
            .bind(job_id.into_inner())
            .fetch_one(pool)
            .await
            .map_err(|e| map_reference_violation(e, job_id, Some(user_id)))?;

        Ok(if removed {
            ToggleOutcome::Removed
        } else {
            ToggleOutcome::Created
        })
    }
}
