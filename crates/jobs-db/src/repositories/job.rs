//! PostgreSQL implementation of JobRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobs_core::entities::{JobCategory, JobPosting, NewJobPosting};
use jobs_core::traits::{JobRepository, RepoResult};
use jobs_core::value_objects::JobId;

use crate::models::JobPostingModel;

use super::error::{job_not_found, map_db_error};

const JOB_COLUMNS: &str = "id, category, title, organization, location, vacancies, last_date, \
                           description, posted_at, job_link";

/// PostgreSQL implementation of JobRepository
#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: JobId) -> RepoResult<Option<JobPosting>> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM job_postings WHERE id = $1");
        let result = sqlx::query_as::<_, JobPostingModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(JobPosting::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, category: Option<JobCategory>) -> RepoResult<Vec<JobPosting>> {
        let sql = format!(
            "SELECT {JOB_COLUMNS} FROM job_postings \
             WHERE ($1::TEXT IS NULL OR category = $1) \
             ORDER BY posted_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, JobPostingModel>(&sql)
            .bind(category.map(JobCategory::as_str))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(JobPosting::try_from).collect()
    }

    #[instrument(skip(self, job), fields(title = %job.title))]
    async fn create(&self, job: &NewJobPosting) -> RepoResult<JobPosting> {
        let sql = format!(
            "INSERT INTO job_postings \
                 (category, title, organization, location, vacancies, last_date, description, job_link) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {JOB_COLUMNS}"
        );
        let row = sqlx::query_as::<_, JobPostingModel>(&sql)
            .bind(job.category.as_str())
            .bind(&job.title)
            .bind(&job.organization)
            .bind(&job.location)
            .bind(job.vacancies)
            .bind(job.last_date)
            .bind(&job.description)
            .bind(&job.job_link)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        JobPosting::try_from(row)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: JobId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(job_not_found(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: JobId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM job_postings WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgJobRepository>();
    }
}
