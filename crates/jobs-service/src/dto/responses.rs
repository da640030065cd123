//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids serialize as
//! JSON numbers.

use chrono::{DateTime, NaiveDate, Utc};
use jobs_core::{CommentId, JobCategory, JobId, ShareId, UserId};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// `{"status": "success", "data": ...}` wrapper, with `count` for lists
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            count: None,
            data,
        }
    }
}

impl<T> SuccessResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        Self {
            status: "success",
            count: Some(data.len()),
            data,
        }
    }
}

/// Bare `{"message": ...}` body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// User fields echoed back by registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUserResponse {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub user: RegisteredUserResponse,
    pub message: String,
}

/// Body of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub data: LoginData,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginData {
    pub access: String,
    pub refresh: String,
    pub user: LoginUserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Fresh access token issued from a refresh token
#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// Profile of the authenticated user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

// ============================================================================
// Job Responses
// ============================================================================

/// A posting with its interaction counts and the viewer's flags
#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub id: JobId,
    pub category: JobCategory,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub vacancies: i32,
    pub last_date: NaiveDate,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    pub job_link: Option<String>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
    pub user_has_liked: bool,
    pub is_bookmarked: bool,
}

/// One row of the trending feed. `posted_at` is a `YYYY-MM-DD` date.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingJobResponse {
    pub id: JobId,
    pub title: String,
    pub organization: String,
    pub category: JobCategory,
    pub location: String,
    pub vacancies: i32,
    pub last_date: NaiveDate,
    pub description: String,
    pub posted_at: String,
    pub likes_count: i64,
}

#[derive(Debug, Serialize)]
pub struct TrendingListResponse {
    pub message: &'static str,
    pub count: usize,
    pub data: Vec<TrendingJobResponse>,
}

impl TrendingListResponse {
    pub fn new(data: Vec<TrendingJobResponse>) -> Self {
        Self {
            message: "Trending jobs fetched successfully",
            count: data.len(),
            data,
        }
    }
}

// ============================================================================
// Engagement Responses
// ============================================================================

/// Result of toggling a bookmark
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkToggleResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub bookmarked: bool,
}

/// Result of liking a job, with the fresh like count
#[derive(Debug, Clone, Serialize)]
pub struct LikeToggleResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub liked: bool,
    pub likes_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub job_id: JobId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A recorded share, with the job's fresh share count
#[derive(Debug, Clone, Serialize)]
pub struct ShareResponse {
    pub id: ShareId,
    pub job_id: JobId,
    pub user_id: Option<UserId>,
    pub platform: String,
    pub created_at: DateTime<Utc>,
    pub shares_count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health of each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
