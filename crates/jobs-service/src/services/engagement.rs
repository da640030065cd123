//! Engagement service
//!
//! Likes, bookmarks, comments and shares on a posting. Every operation checks
//! that the posting exists first; the store's foreign keys still catch a
//! posting deleted in between and report it the same way.

use jobs_core::{
    validate_comment_content, validate_share_platform, CommentId, DomainError, JobId,
    ToggleKind, ToggleOutcome, UserId,
};
use tracing::{info, instrument};

use crate::dto::{
    BookmarkToggleResponse, CommentResponse, CreateCommentRequest, LikeToggleResponse,
    ShareJobRequest, ShareResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Toggles ===

    /// Create the (user, job) relation if absent, remove it if present
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        kind: ToggleKind,
        user_id: UserId,
        job_id: JobId,
    ) -> ServiceResult<ToggleOutcome> {
        self.ensure_job(job_id).await?;

        let outcome = match kind {
            ToggleKind::Like => self.ctx.like_repo().toggle(user_id, job_id).await?,
            ToggleKind::Bookmark => self.ctx.bookmark_repo().toggle(user_id, job_id).await?,
        };

        info!(%kind, user_id = %user_id, job_id = %job_id, ?outcome, "Toggled relation");
        Ok(outcome)
    }

    pub async fn toggle_bookmark(
        &self,
        user_id: UserId,
        job_id: JobId,
    ) -> ServiceResult<BookmarkToggleResponse> {
        let outcome = self.toggle(ToggleKind::Bookmark, user_id, job_id).await?;
        Ok(BookmarkToggleResponse::from(outcome))
    }

    pub async fn toggle_like(
        &self,
        user_id: UserId,
        job_id: JobId,
    ) -> ServiceResult<LikeToggleResponse> {
        let outcome = self.toggle(ToggleKind::Like, user_id, job_id).await?;
        let likes_count = self.ctx.like_repo().count_for_job(job_id).await?;
        Ok(LikeToggleResponse {
            status: "success",
            message: match outcome {
                ToggleOutcome::Created => "Job liked",
                ToggleOutcome::Removed => "Like removed",
            },
            liked: outcome.is_active(),
            likes_count,
        })
    }

    /// Record a like with no user attached. Anonymous likes are never unique.
    #[instrument(skip(self))]
    pub async fn add_anonymous_like(&self, job_id: JobId) -> ServiceResult<LikeToggleResponse> {
        self.ensure_job(job_id).await?;
        self.ctx.like_repo().add_anonymous(job_id).await?;
        let likes_count = self.ctx.like_repo().count_for_job(job_id).await?;
        Ok(LikeToggleResponse {
            status: "success",
            message: "Job liked",
            liked: true,
            likes_count,
        })
    }

    /// Toggle for a signed-in viewer, add an anonymous like otherwise
    pub async fn like(
        &self,
        viewer: Option<UserId>,
        job_id: JobId,
    ) -> ServiceResult<LikeToggleResponse> {
        match viewer {
            Some(user_id) => self.toggle_like(user_id, job_id).await,
            None => self.add_anonymous_like(job_id).await,
        }
    }

    // === Comments ===

    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        user_id: UserId,
        job_id: JobId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let content = validate_comment_content(&request.content)?;
        self.ensure_job(job_id).await?;

        let comment = self.ctx.comment_repo().create(job_id, user_id, &content).await?;
        info!(comment_id = %comment.id, job_id = %job_id, "Comment added");
        Ok(CommentResponse::from(comment))
    }

    /// Comments on a posting, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, job_id: JobId) -> ServiceResult<Vec<CommentResponse>> {
        self.ensure_job(job_id).await?;
        let comments = self.ctx.comment_repo().find_by_job(job_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Delete a comment. Only its author may do so.
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        user_id: UserId,
        job_id: JobId,
        comment_id: CommentId,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.job_id == job_id)
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_authored_by(user_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        if !self.ctx.comment_repo().delete(comment_id).await? {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }
        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    // === Shares ===

    #[instrument(skip(self, request))]
    pub async fn share_job(
        &self,
        job_id: JobId,
        user_id: Option<UserId>,
        request: ShareJobRequest,
    ) -> ServiceResult<ShareResponse> {
        let platform = validate_share_platform(&request.platform)?;
        self.ensure_job(job_id).await?;

        let share = self.ctx.share_repo().create(job_id, user_id, &platform).await?;
        let shares_count = self.ctx.share_repo().count_for_job(job_id).await?;
        Ok(ShareResponse {
            id: share.id,
            job_id: share.job_id,
            user_id: share.user_id,
            platform: share.platform,
            created_at: share.created_at,
            shares_count,
        })
    }

    async fn ensure_job(&self, job_id: JobId) -> ServiceResult<()> {
        if self.ctx.job_repo().exists(job_id).await? {
            Ok(())
        } else {
            Err(DomainError::JobNotFound(job_id).into())
        }
    }
}
