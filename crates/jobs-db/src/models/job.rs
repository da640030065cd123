//! Job posting database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for job_postings table
#[derive(Debug, Clone, FromRow)]
pub struct JobPostingModel {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub vacancies: i32,
    pub last_date: NaiveDate,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    pub job_link: Option<String>,
}
