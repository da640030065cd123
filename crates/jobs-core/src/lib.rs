//! # jobs-core
//!
//! Domain layer containing entities, id value objects, repository traits, and the
//! engagement rules (count aggregation, trending ranking, toggle semantics).
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod engagement;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use engagement::{
    annotate, rank_trending, AnnotatedJob, EngagementCounts, JobStats, RelationState,
    ToggleKind, ToggleOutcome, TrendingEntry, ViewerFlags, ViewerMarks, TRENDING_WINDOW,
};
pub use entities::{
    validate_comment_content, validate_share_platform, Bookmark, Comment, JobCategory,
    JobPosting, Like, NewJobPosting, NewUser, Session, Share, User, DEFAULT_LOCATION,
    MAX_COMMENT_LENGTH, MAX_PLATFORM_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    BookmarkRepository, CommentRepository, JobRepository, LikeRepository, RepoResult,
    SessionRepository, ShareRepository, ToggleRelation, UserRepository,
};
pub use value_objects::{BookmarkId, CommentId, IdParseError, JobId, LikeId, ShareId, UserId};
