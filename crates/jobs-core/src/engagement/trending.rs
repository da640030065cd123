//! Trending ranking
//!
//! Jobs are ordered by like count (highest first), then by `posted_at`
//! (newest first), then by id (highest first) so equal snapshots always rank
//! identically. Only the first `window` entries are kept.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::entities::JobPosting;
use crate::value_objects::JobId;

/// Size of the trending feed
pub const TRENDING_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingEntry {
    pub job: JobPosting,
    pub likes_count: i64,
}

/// Rank jobs by fresh like counts and keep the top `window`
pub fn rank_trending(
    jobs: Vec<JobPosting>,
    likes: &HashMap<JobId, i64>,
    window: usize,
) -> Vec<TrendingEntry> {
    let mut entries: Vec<TrendingEntry> = jobs
        .into_iter()
        .map(|job| TrendingEntry {
            likes_count: likes.get(&job.id).copied().unwrap_or(0),
            job,
        })
        .collect();

    entries.sort_unstable_by_key(|e| {
        (Reverse(e.likes_count), Reverse(e.job.posted_at), Reverse(e.job.id))
    });
    entries.truncate(window);
    entries
}
