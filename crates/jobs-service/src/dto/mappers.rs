//! Entity to DTO mappers

use jobs_core::entities::{Comment, User};
use jobs_core::{AnnotatedJob, ToggleOutcome, TrendingEntry};

use super::responses::{
    BookmarkToggleResponse, CommentResponse, JobResponse, LoginUserResponse, RegisteredUserResponse,
    TrendingJobResponse, UserResponse,
};

/// Date format used for `posted_at` in the trending feed
pub const TRENDING_DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            is_active: user.is_active,
            is_staff: user.is_staff,
            date_joined: user.date_joined,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for RegisteredUserResponse {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<&User> for LoginUserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

// ============================================================================
// Job Mappers
// ============================================================================

impl From<AnnotatedJob> for JobResponse {
    fn from(annotated: AnnotatedJob) -> Self {
        let AnnotatedJob { job, stats, viewer } = annotated;
        Self {
            id: job.id,
            category: job.category,
            title: job.title,
            organization: job.organization,
            location: job.location,
            vacancies: job.vacancies,
            last_date: job.last_date,
            description: job.description,
            posted_at: job.posted_at,
            job_link: job.job_link,
            likes_count: stats.likes_count,
            comments_count: stats.comments_count,
            shares_count: stats.shares_count,
            user_has_liked: viewer.user_has_liked,
            is_bookmarked: viewer.is_bookmarked,
        }
    }
}

impl From<TrendingEntry> for TrendingJobResponse {
    fn from(entry: TrendingEntry) -> Self {
        let TrendingEntry { job, likes_count } = entry;
        Self {
            id: job.id,
            title: job.title,
            organization: job.organization,
            category: job.category,
            location: job.location,
            vacancies: job.vacancies,
            last_date: job.last_date,
            description: job.description,
            posted_at: job.posted_at.format(TRENDING_DATE_FORMAT).to_string(),
            likes_count,
        }
    }
}

// ============================================================================
// Engagement Mappers
// ============================================================================

impl From<ToggleOutcome> for BookmarkToggleResponse {
    fn from(outcome: ToggleOutcome) -> Self {
        Self {
            status: "success",
            message: match outcome {
                ToggleOutcome::Created => "Job bookmarked",
                ToggleOutcome::Removed => "Bookmark removed",
            },
            bookmarked: outcome.is_active(),
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            job_id: comment.job_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}
