//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`; the HTTP layer rejects a
//! body that fails validation before a service sees it.

use chrono::NaiveDate;
use jobs_core::{JobCategory, NewJobPosting};
use serde::Deserialize;
use validator::Validate;

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request. The username is always the email address.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "First name must be 1-150 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 150, message = "Last name must be 1-150 characters"))]
    pub last_name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Login request. `role: "admin"` restricts the login to staff accounts.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<String>,
}

impl LoginRequest {
    pub fn wants_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "This field is required"))]
    pub refresh: String,
}

/// Logout request naming the refresh token to revoke
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "This field is required"))]
    pub refresh: String,
}

// ============================================================================
// Job Requests
// ============================================================================

/// Query string of `GET /api/jobs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListQuery {
    pub category: Option<String>,
}

impl JobListQuery {
    /// Parse the category filter; a blank value means no filter
    pub fn category(&self) -> ServiceResult<Option<JobCategory>> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(code) => code.parse().map(Some).map_err(ServiceError::from),
        }
    }
}

/// Create job posting request (staff only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub category: JobCategory,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Organization must be 1-255 characters"))]
    pub organization: String,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: Option<String>,

    #[validate(range(min = 0, message = "Vacancies must be a non-negative integer"))]
    pub vacancies: i32,

    pub last_date: NaiveDate,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(url(message = "Enter a valid URL"))]
    pub job_link: Option<String>,
}

impl CreateJobRequest {
    /// Convert into the domain creation input
    pub fn into_new_job(self) -> NewJobPosting {
        let mut job = NewJobPosting::new(
            self.title,
            self.organization,
            self.vacancies,
            self.last_date,
            self.description,
        )
        .with_category(self.category);
        if let Some(location) = self.location {
            job = job.with_location(location);
        }
        if let Some(link) = self.job_link {
            job = job.with_job_link(link);
        }
        job
    }
}

// ============================================================================
// Interaction Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

/// Share request; the platform label may be left out
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ShareJobRequest {
    #[serde(default)]
    #[validate(length(max = 50, message = "Platform must be at most 50 characters"))]
    pub platform: String,
}
