//! Job posting handlers
//!
//! Listing requires a signed-in viewer; a single posting may be read
//! anonymously, in which case both viewer flags are false.

use axum::{
    extract::{Query, State},
    Json,
};
use jobs_service::{
    CreateJobRequest, JobListQuery, JobResponse, JobService, SuccessResponse, TrendingListResponse,
    TrendingService,
};

use crate::extractors::{AuthUser, JobPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /api/jobs?category=BANKING
pub async fn list_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<JobListQuery>,
) -> ApiResult<Json<SuccessResponse<Vec<JobResponse>>>> {
    let category = query.category()?;
    let jobs = JobService::new(state.service_context())
        .list_jobs(category, Some(auth.user_id))
        .await?;
    Ok(Json(SuccessResponse::list(jobs)))
}

/// GET /api/jobs/:job_id
pub async fn get_job(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    JobPath(job_id): JobPath,
) -> ApiResult<Json<SuccessResponse<JobResponse>>> {
    let job = JobService::new(state.service_context())
        .get_job(job_id, viewer.user_id())
        .await?;
    Ok(Json(SuccessResponse::new(job)))
}

/// POST /api/jobs (staff only)
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateJobRequest>,
) -> ApiResult<Created<Json<SuccessResponse<JobResponse>>>> {
    let job = JobService::new(state.service_context())
        .create_job(auth.user_id, request)
        .await?;
    Ok(Created(Json(SuccessResponse::new(job))))
}

/// DELETE /api/jobs/:job_id (staff only)
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    JobPath(job_id): JobPath,
) -> ApiResult<NoContent> {
    JobService::new(state.service_context())
        .delete_job(auth.user_id, job_id)
        .await?;
    Ok(NoContent)
}

/// GET /api/trending
pub async fn trending(State(state): State<AppState>) -> ApiResult<Json<TrendingListResponse>> {
    let jobs = TrendingService::new(state.service_context()).trending().await?;
    Ok(Json(TrendingListResponse::new(jobs)))
}
