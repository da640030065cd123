//! Trending service
//!
//! Ranks every posting by a freshly counted number of likes.

use jobs_core::{rank_trending, JobId, TRENDING_WINDOW};
use tracing::instrument;

use crate::dto::TrendingJobResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct TrendingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrendingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Top postings by likes, newest first on ties, at most [`TRENDING_WINDOW`]
    #[instrument(skip(self))]
    pub async fn trending(&self) -> ServiceResult<Vec<TrendingJobResponse>> {
        let jobs = self.ctx.job_repo().list(None).await?;
        let job_ids: Vec<JobId> = jobs.iter().map(|job| job.id).collect();
        let likes = self.ctx.like_repo().count_by_jobs(&job_ids).await?;

        Ok(rank_trending(jobs, &likes, TRENDING_WINDOW)
            .into_iter()
            .map(TrendingJobResponse::from)
            .collect())
    }
}
