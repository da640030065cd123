//! Authentication extractor
//!
//! Resolves the bearer token to an active user. The token's session must
//! still be open, so a logged-out token is refused even before it expires.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jobs_core::UserId;
use jobs_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl AuthUser {
    async fn from_bearer(state: &AppState, token: &str) -> Result<Self, ApiError> {
        let user = AuthService::new(state.service_context())
            .validate_token(token)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::from(e)
            })?;

        Ok(Self { user_id: user.id })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        Self::from_bearer(&app_state, bearer.token()).await
    }
}

/// Viewer identity when a bearer token is sent
///
/// No Authorization header means an anonymous viewer. A header carrying a
/// bad token is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.as_ref().map(|auth| auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                let auth = AuthUser::from_bearer(&app_state, bearer.token()).await?;
                Ok(Self(Some(auth)))
            }
            Err(_) => Ok(Self(None)),
        }
    }
}
