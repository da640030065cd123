//! Profile handlers for the signed-in user

use axum::{extract::State, Json};
use jobs_service::{SuccessResponse, UserResponse, UserService};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SuccessResponse<UserResponse>>> {
    let profile = UserService::new(state.service_context()).profile(auth.user_id).await?;
    Ok(Json(SuccessResponse::new(profile)))
}

/// DELETE /api/profile
pub async fn delete_profile(State(state): State<AppState>, auth: AuthUser) -> ApiResult<NoContent> {
    UserService::new(state.service_context())
        .delete_account(auth.user_id)
        .await?;
    Ok(NoContent)
}
