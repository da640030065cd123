//! Bookmark, like, comment and share handlers

use axum::{extract::State, Json};
use jobs_service::{
    BookmarkToggleResponse, CommentResponse, CreateCommentRequest, EngagementService,
    LikeToggleResponse, ShareJobRequest, ShareResponse, SuccessResponse,
};

use crate::extractors::{
    AuthUser, CommentPath, JobPath, OptionalAuthUser, OptionalValidatedJson, ValidatedJson,
};
use crate::response::{ApiResult, Created, NoContent, Toggled};
use crate::state::AppState;

/// POST /api/jobs/:job_id/bookmark
///
/// 201 when the bookmark was created, 200 when it was removed.
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    JobPath(job_id): JobPath,
) -> ApiResult<Toggled<BookmarkToggleResponse>> {
    let body = EngagementService::new(state.service_context())
        .toggle_bookmark(auth.user_id, job_id)
        .await?;
    Ok(Toggled {
        created: body.bookmarked,
        body,
    })
}

/// POST /api/jobs/:job_id/like
///
/// Signed-in viewers toggle their like; anonymous requests add a like.
pub async fn like_job(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    JobPath(job_id): JobPath,
) -> ApiResult<Toggled<LikeToggleResponse>> {
    let body = EngagementService::new(state.service_context())
        .like(viewer.user_id(), job_id)
        .await?;
    Ok(Toggled {
        created: body.liked,
        body,
    })
}

/// GET /api/jobs/:job_id/comments
pub async fn list_comments(
    State(state): State<AppState>,
    JobPath(job_id): JobPath,
) -> ApiResult<Json<SuccessResponse<Vec<CommentResponse>>>> {
    let comments = EngagementService::new(state.service_context())
        .list_comments(job_id)
        .await?;
    Ok(Json(SuccessResponse::list(comments)))
}

/// POST /api/jobs/:job_id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    JobPath(job_id): JobPath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let comment = EngagementService::new(state.service_context())
        .add_comment(auth.user_id, job_id, request)
        .await?;
    Ok(Created(Json(comment)))
}

/// DELETE /api/jobs/:job_id/comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    path: CommentPath,
) -> ApiResult<NoContent> {
    EngagementService::new(state.service_context())
        .delete_comment(auth.user_id, path.job_id, path.comment_id)
        .await?;
    Ok(NoContent)
}

/// POST /api/jobs/:job_id/share
pub async fn share_job(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    JobPath(job_id): JobPath,
    OptionalValidatedJson(request): OptionalValidatedJson<ShareJobRequest>,
) -> ApiResult<Created<Json<ShareResponse>>> {
    let share = EngagementService::new(state.service_context())
        .share_job(job_id, viewer.user_id(), request)
        .await?;
    Ok(Created(Json(share)))
}
