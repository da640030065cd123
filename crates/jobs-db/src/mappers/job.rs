//! Job posting model -> entity mapper

use jobs_core::entities::JobPosting;
use jobs_core::error::DomainError;
use jobs_core::value_objects::JobId;

use crate::models::JobPostingModel;

impl TryFrom<JobPostingModel> for JobPosting {
    type Error = DomainError;

    fn try_from(model: JobPostingModel) -> Result<Self, Self::Error> {
        Ok(JobPosting {
            id: JobId::new(model.id),
            category: model.category.parse()?,
            title: model.title,
            organization: model.organization,
            location: model.location,
            vacancies: model.vacancies,
            last_date: model.last_date,
            description: model.description,
            posted_at: model.posted_at,
            job_link: model.job_link,
        })
    }
}

/// Raw ids for binding as a `BIGINT[]`
pub fn ids_to_raw(ids: &[JobId]) -> Vec<i64> {
    ids.iter().map(|id| id.into_inner()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use jobs_core::entities::JobCategory;

    fn model(category: &str) -> JobPostingModel {
        JobPostingModel {
            id: 3,
            category: category.to_string(),
            title: "PO".to_string(),
            organization: "SBI".to_string(),
            location: "Mumbai".to_string(),
            vacancies: 600,
            last_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            description: "Probationary officers".to_string(),
            posted_at: Utc::now(),
            job_link: None,
        }
    }

    #[test]
    fn test_model_to_entity() {
        let job = JobPosting::try_from(model("BANKING")).unwrap();
        assert_eq!(job.id, JobId::new(3));
        assert_eq!(job.category, JobCategory::Banking);
    }

    #[test]
    fn test_unknown_category_fails() {
        assert!(JobPosting::try_from(model("CIRCUS")).is_err());
    }
}
