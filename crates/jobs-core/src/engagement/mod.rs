//! Engagement rules
//!
//! Pure functions and types over already-loaded data: attaching interaction
//! counts and viewer flags to postings, ranking the trending feed, and the
//! two-state toggle used for likes and bookmarks. Loading the inputs is the
//! job of the repositories.

mod aggregation;
mod toggle;
mod trending;

pub use aggregation::{annotate, AnnotatedJob, EngagementCounts, JobStats, ViewerFlags, ViewerMarks};
pub use toggle::{RelationState, ToggleKind, ToggleOutcome};
pub use trending::{rank_trending, TrendingEntry, TRENDING_WINDOW};
