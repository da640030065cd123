//! Interaction table models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub job_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub user_id: i64,
    pub job_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for shares table
#[derive(Debug, Clone, FromRow)]
pub struct ShareModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub job_id: i64,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

/// One row of a `GROUP BY job_id` count
#[derive(Debug, Clone, FromRow)]
pub struct JobCountModel {
    pub job_id: i64,
    pub count: i64,
}
