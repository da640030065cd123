//! Authentication handlers
//!
//! Registration, login, logout and access-token refresh.

use axum::{extract::State, Json};
use jobs_service::{
    AccessTokenResponse, AuthService, LoginRequest, LoginResponse, LogoutRequest,
    MessageResponse, RefreshTokenRequest, RegisterRequest, RegisterResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let response = AuthService::new(state.service_context()).register(request).await?;
    Ok(Created(Json(response)))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = AuthService::new(state.service_context()).login(request).await?;
    Ok(Json(response))
}

/// POST /api/token/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<AccessTokenResponse>> {
    let response = AuthService::new(state.service_context()).refresh(request).await?;
    Ok(Json(response))
}

/// POST /api/logout
///
/// Revokes the session behind the given refresh token.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<LogoutRequest>,
) -> ApiResult<Json<MessageResponse>> {
    AuthService::new(state.service_context())
        .logout(auth.user_id, request)
        .await?;
    Ok(Json(MessageResponse::new("Logout successful")))
}
