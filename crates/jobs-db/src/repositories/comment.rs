//! PostgreSQL implementation of CommentRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobs_core::entities::Comment;
use jobs_core::traits::{CommentRepository, RepoResult};
use jobs_core::value_objects::{CommentId, JobId, UserId};

use crate::mappers::{counts_to_map, ids_to_raw};
use crate::models::{CommentModel, JobCountModel};

use super::error::{map_db_error, map_reference_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, job_id: JobId, user_id: UserId, content: &str) -> RepoResult<Comment> {
        let row = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (user_id, job_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, job_id, content, created_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(job_id.into_inner())
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, job_id, Some(user_id)))?;

        Ok(Comment::from(row))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentModel>(
            "SELECT id, user_id, job_id, content, created_at FROM comments WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_job(&self, job_id: JobId) -> RepoResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, user_id, job_id, content, created_at
            FROM comments
            WHERE job_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(job_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, job_ids), fields(jobs = job_ids.len()))]
    async fn count_by_jobs(&self, job_ids: &[JobId]) -> RepoResult<HashMap<JobId, i64>> {
        if job_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, JobCountModel>(
            r"
            SELECT job_id, COUNT(*) AS count
            FROM comments
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
