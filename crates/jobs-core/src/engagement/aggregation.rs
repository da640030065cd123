//! Attach interaction counts and viewer flags to job postings

use std::collections::{HashMap, HashSet};

use crate::entities::JobPosting;
use crate::value_objects::JobId;

/// Per-job interaction counts loaded in bulk
#[derive(Debug, Clone, Default)]
pub struct EngagementCounts {
    pub likes: HashMap<JobId, i64>,
    pub comments: HashMap<JobId, i64>,
    pub shares: HashMap<JobId, i64>,
}

impl EngagementCounts {
    /// Counts for a job; jobs without rows count as 0
    pub fn stats_for(&self, job_id: JobId) -> JobStats {
        let get = |map: &HashMap<JobId, i64>| map.get(&job_id).copied().unwrap_or(0);
        JobStats {
            likes_count: get(&self.likes),
            comments_count: get(&self.comments),
            shares_count: get(&self.shares),
        }
    }
}

/// Jobs the current viewer has liked or bookmarked
#[derive(Debug, Clone, Default)]
pub struct ViewerMarks {
    pub liked: HashSet<JobId>,
    pub bookmarked: HashSet<JobId>,
}

impl ViewerMarks {
    /// Marks for an unauthenticated viewer: nothing liked, nothing bookmarked
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn flags_for(&self, job_id: JobId) -> ViewerFlags {
        ViewerFlags {
            user_has_liked: self.liked.contains(&job_id),
            is_bookmarked: self.bookmarked.contains(&job_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobStats {
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerFlags {
    pub user_has_liked: bool,
    pub is_bookmarked: bool,
}

/// A posting with its counts and the viewer's flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedJob {
    pub job: JobPosting,
    pub stats: JobStats,
    pub viewer: ViewerFlags,
}

/// Annotate jobs, keeping their input order
pub fn annotate(
    jobs: Vec<JobPosting>,
    counts: &EngagementCounts,
    marks: &ViewerMarks,
) -> Vec<AnnotatedJob> {
    jobs.into_iter()
        .map(|job| AnnotatedJob {
            stats: counts.stats_for(job.id),
            viewer: marks.flags_for(job.id),
            job,
        })
        .collect()
}
