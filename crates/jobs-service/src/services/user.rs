//! User service
//!
//! Profile lookup and account deletion for the authenticated user.

use jobs_core::{DomainError, UserId};
use tracing::{info, instrument};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Delete the account. Sessions, comments, bookmarks and the user's own
    /// likes and shares go with it; anonymous interactions stay.
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: UserId) -> ServiceResult<()> {
        let revoked = self.ctx.session_repo().revoke_all_for_user(user_id).await?;
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, revoked_sessions = revoked, "User account deleted");
        Ok(())
    }
}
