//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use jobs_core::{CommentId, JobId};
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct RawJobPath {
    job_id: String,
}

#[derive(Debug, Deserialize)]
struct RawCommentPath {
    job_id: String,
    comment_id: String,
}

/// `:job_id` parsed as a positive [`JobId`]
#[derive(Debug, Clone, Copy)]
pub struct JobPath(pub JobId);

/// `:job_id` and `:comment_id`
#[derive(Debug, Clone, Copy)]
pub struct CommentPath {
    pub job_id: JobId,
    pub comment_id: CommentId,
}

fn parse_id<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

#[async_trait]
impl<S> FromRequestParts<S> for JobPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawJobPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;
        Ok(Self(parse_id(&raw.job_id, "job_id")?))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CommentPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawCommentPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;
        Ok(Self {
            job_id: parse_id(&raw.job_id, "job_id")?,
            comment_id: parse_id(&raw.comment_id, "comment_id")?,
        })
    }
}
