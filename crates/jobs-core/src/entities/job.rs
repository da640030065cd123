//! Job posting entity - a government job listing users engage with

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::JobId;

/// Location used when a posting does not name one
pub const DEFAULT_LOCATION: &str = "All India";

const MAX_TEXT_FIELD: usize = 255;

/// Recruitment category of a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobCategory {
    #[default]
    Railway,
    Banking,
    Ssc,
    Upsc,
    StateGovt,
    Teaching,
    Other,
}

impl JobCategory {
    /// All categories in display order
    pub const ALL: [JobCategory; 7] = [
        Self::Railway,
        Self::Banking,
        Self::Ssc,
        Self::Upsc,
        Self::StateGovt,
        Self::Teaching,
        Self::Other,
    ];

    /// Wire/storage code, e.g. `STATE_GOVT`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Railway => "RAILWAY",
            Self::Banking => "BANKING",
            Self::Ssc => "SSC",
            Self::Upsc => "UPSC",
            Self::StateGovt => "STATE_GOVT",
            Self::Teaching => "TEACHING",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobCategory {
    type Err = DomainError;

    /// Exact match on the stored code, so `banking` is not `BANKING`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::InvalidField {
                field: "category",
                reason: format!("unknown category '{s}'"),
            })
    }
}

/// Job posting entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: JobId,
    pub category: JobCategory,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub vacancies: i32,
    pub last_date: NaiveDate,
    pub description: String,
    /// Stamped by the store on insert, never changed afterwards
    pub posted_at: DateTime<Utc>,
    pub job_link: Option<String>,
}

/// Input for creating a job posting. The store assigns `id` and `posted_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobPosting {
    pub category: JobCategory,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub vacancies: i32,
    pub last_date: NaiveDate,
    pub description: String,
    pub job_link: Option<String>,
}

impl NewJobPosting {
    /// Build a posting in the default category and location
    pub fn new(
        title: impl Into<String>,
        organization: impl Into<String>,
        vacancies: i32,
        last_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: JobCategory::default(),
            title: title.into(),
            organization: organization.into(),
            location: DEFAULT_LOCATION.to_string(),
            vacancies,
            last_date,
            description: description.into(),
            job_link: None,
        }
    }

    pub fn with_category(mut self, category: JobCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_job_link(mut self, link: impl Into<String>) -> Self {
        self.job_link = Some(link.into());
        self
    }

    /// Check field constraints, reporting the first offending field
    pub fn validate(&self) -> Result<(), DomainError> {
        check_text("title", &self.title)?;
        check_text("organization", &self.organization)?;
        check_text("location", &self.location)?;

        if self.vacancies < 0 {
            return Err(DomainError::InvalidField {
                field: "vacancies",
                reason: "must be a non-negative integer".to_string(),
            });
        }

        if self.description.trim().is_empty() {
            return Err(DomainError::InvalidField {
                field: "description",
                reason: "must not be empty".to_string(),
            });
        }

        if let Some(link) = &self.job_link {
            if !(link.starts_with("http://") || link.starts_with("https://")) || link.len() <= 8 {
                return Err(DomainError::InvalidField {
                    field: "job_link",
                    reason: "must be an http(s) URL".to_string(),
                });
            }
        }

        Ok(())
    }
}

fn check_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(DomainError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if len > MAX_TEXT_FIELD {
        return Err(DomainError::InvalidField {
            field,
            reason: format!("must be at most {MAX_TEXT_FIELD} characters"),
        });
    }
    Ok(())
}
