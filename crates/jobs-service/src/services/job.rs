//! Job service
//!
//! Listing and lookup of postings annotated for the viewer, plus the staff-only
//! create and delete operations.

use jobs_core::{DomainError, JobCategory, JobId, UserId};
use tracing::{info, instrument};

use crate::dto::{CreateJobRequest, JobResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::feed::FeedService;

pub struct JobService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> JobService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List postings, newest first, optionally filtered by category
    #[instrument(skip(self))]
    pub async fn list_jobs(
        &self,
        category: Option<JobCategory>,
        viewer: Option<UserId>,
    ) -> ServiceResult<Vec<JobResponse>> {
        let jobs = self.ctx.job_repo().list(category).await?;
        let annotated = FeedService::new(self.ctx).annotate(jobs, viewer).await?;
        Ok(annotated.into_iter().map(JobResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_job(&self, job_id: JobId, viewer: Option<UserId>) -> ServiceResult<JobResponse> {
        let job = self
            .ctx
            .job_repo()
            .find_by_id(job_id)
            .await?
            .ok_or(DomainError::JobNotFound(job_id))?;
        let annotated = FeedService::new(self.ctx).annotate_one(job, viewer).await?;
        Ok(JobResponse::from(annotated))
    }

    /// Create a posting. Only staff accounts may do this.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_job(
        &self,
        actor: UserId,
        request: CreateJobRequest,
    ) -> ServiceResult<JobResponse> {
        self.require_staff(actor).await?;

        let new_job = request.into_new_job();
        new_job.validate()?;
        let job = self.ctx.job_repo().create(&new_job).await?;

        info!(job_id = %job.id, category = %job.category, "Job posting created");
        let annotated = FeedService::new(self.ctx).annotate_one(job, Some(actor)).await?;
        Ok(JobResponse::from(annotated))
    }

    /// Delete a posting and, by cascade, every interaction with it
    #[instrument(skip(self))]
    pub async fn delete_job(&self, actor: UserId, job_id: JobId) -> ServiceResult<()> {
        self.require_staff(actor).await?;
        self.ctx.job_repo().delete(job_id).await?;
        info!(job_id = %job_id, "Job posting deleted");
        Ok(())
    }

    async fn require_staff(&self, user_id: UserId) -> ServiceResult<()> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        if !user.is_staff {
            return Err(ServiceError::permission_denied("staff account required"));
        }
        Ok(())
    }
}
