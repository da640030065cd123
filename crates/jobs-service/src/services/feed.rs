//! Feed service
//!
//! Joins interaction counts and the viewer's like/bookmark marks onto job
//! postings. Counts are loaded with one batched query per interaction kind,
//! never one per job, and are never cached.

use jobs_core::{
    annotate, AnnotatedJob, EngagementCounts, JobId, JobPosting, UserId, ViewerMarks,
};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Annotate jobs for a viewer, keeping their order. An anonymous viewer
    /// gets both flags false.
    #[instrument(skip(self, jobs), fields(jobs = jobs.len()))]
    pub async fn annotate(
        &self,
        jobs: Vec<JobPosting>,
        viewer: Option<UserId>,
    ) -> ServiceResult<Vec<AnnotatedJob>> {
        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        let job_ids: Vec<JobId> = jobs.iter().map(|job| job.id).collect();
        let (counts, marks) =
            tokio::try_join!(self.counts(&job_ids), self.marks(viewer, &job_ids))?;

        debug!(viewer = ?viewer, "Annotated job feed");
        Ok(annotate(jobs, &counts, &marks))
    }

    /// Annotate a single job
    pub async fn annotate_one(
        &self,
        job: JobPosting,
        viewer: Option<UserId>,
    ) -> ServiceResult<AnnotatedJob> {
        let mut annotated = self.annotate(vec![job], viewer).await?;
        annotated
            .pop()
            .ok_or_else(|| ServiceError::internal("annotation dropped the job"))
    }

    async fn counts(&self, job_ids: &[JobId]) -> ServiceResult<EngagementCounts> {
        let (likes, comments, shares) = tokio::try_join!(
            self.ctx.like_repo().count_by_jobs(job_ids),
            self.ctx.comment_repo().count_by_jobs(job_ids),
            self.ctx.share_repo().count_by_jobs(job_ids),
        )?;
        Ok(EngagementCounts {
            likes,
            comments,
            shares,
        })
    }

    async fn marks(&self, viewer: Option<UserId>, job_ids: &[JobId]) -> ServiceResult<ViewerMarks> {
        let Some(user_id) = viewer else {
            return Ok(ViewerMarks::anonymous());
        };
        let (liked, bookmarked) = tokio::try_join!(
            self.ctx.like_repo().marked_jobs(user_id, job_ids),
            self.ctx.bookmark_repo().marked_jobs(user_id, job_ids),
        )?;
        Ok(ViewerMarks { liked, bookmarked })
    }
}
