//! Authentication service
//!
//! Handles registration, login, access-token refresh and logout. Each login
//! opens a [`Session`] in the store; its id rides in both tokens, so revoking
//! the session at logout invalidates the refresh token and every access token
//! issued from it.

use jobs_common::auth::{hash_password, validate_password_strength, verify_password};
use jobs_common::AppError;
use jobs_core::entities::{NewUser, Session, User};
use jobs_core::{DomainError, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{
    AccessTokenResponse, LoginData, LoginRequest, LoginResponse, LoginUserResponse,
    LogoutRequest, RefreshTokenRequest, RegisterRequest, RegisterResponse,
    RegisteredUserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const INVALID_REFRESH_TOKEN: &str = "Invalid or expired token";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user. The username is the email address.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        let new_user = NewUser::new(&request.email, request.first_name, request.last_name);

        validate_password_strength(&request.password, &new_user.email)?;

        if self.ctx.user_repo().email_exists(&new_user.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        Ok(RegisterResponse {
            user: RegisteredUserResponse::from(&user),
            message: "User Created Successfully. Now perform Login to get your token".to_string(),
        })
    }

    /// Login with email and password
    ///
    /// `role: "admin"` additionally requires a staff account.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let email = request.email.trim().to_lowercase();

        let user = self.ctx.user_repo().find_by_email(&email).await?.ok_or_else(|| {
            warn!("Login failed: user not found");
            ServiceError::App(AppError::InvalidCredentials)
        })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidCredentials))?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        user.ensure_active()?;

        if request.wants_admin() && !user.is_staff {
            warn!(user_id = %user.id, "Admin login refused for non-staff account");
            return Err(DomainError::NotStaff.into());
        }

        let session = Session::open(user.id, self.ctx.jwt_service().refresh_ttl());
        self.ctx.session_repo().create(&session).await?;

        let tokens = self.ctx.jwt_service().issue_pair(user.id, session.session_id)?;

        info!(user_id = %user.id, session_id = %session.session_id, "User logged in");

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            data: LoginData {
                access: tokens.access,
                refresh: tokens.refresh,
                user: LoginUserResponse::from(&user),
            },
        })
    }

    /// Issue a new access token for a live refresh-token session
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AccessTokenResponse> {
        let claims = self.ctx.jwt_service().validate_refresh_token(&request.refresh)?;
        let user_id = claims.user_id()?;

        let session = self
            .ctx
            .session_repo()
            .find_active(claims.session_id)
            .await?
            .filter(|session| session.user_id == user_id)
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        let user = self.active_user(session.user_id).await?;
        let access = self.ctx.jwt_service().issue_access(user.id, session.session_id)?;

        Ok(AccessTokenResponse { access })
    }

    /// Revoke the session named by the refresh token
    ///
    /// A token that does not decode, belongs to someone else, or whose session
    /// is already revoked fails with "Invalid or expired token".
    #[instrument(skip(self, request))]
    pub async fn logout(
        &self,
        user_id: UserId,
        request: LogoutRequest,
    ) -> ServiceResult<()> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh)
            .map_err(|_| ServiceError::validation(INVALID_REFRESH_TOKEN))?;

        if claims.user_id().ok() != Some(user_id) {
            return Err(ServiceError::validation(INVALID_REFRESH_TOKEN));
        }

        if !self.ctx.session_repo().revoke(claims.session_id).await? {
            return Err(ServiceError::validation(INVALID_REFRESH_TOKEN));
        }

        info!(user_id = %user_id, session_id = %claims.session_id, "User logged out");
        Ok(())
    }

    /// Resolve an access token to its active user
    ///
    /// The token must verify, its session must still be active and the
    /// account must be active.
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        let user_id = claims.user_id()?;

        let session = self
            .ctx
            .session_repo()
            .find_active(claims.session_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;
        if session.user_id != user_id {
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        self.active_user(user_id).await
    }

    async fn active_user(&self, user_id: UserId) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;
        user.ensure_active()?;
        Ok(user)
    }
}
