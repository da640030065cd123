//! Value objects - immutable types that represent domain concepts

mod ids;

pub use ids::{BookmarkId, CommentId, IdParseError, JobId, LikeId, ShareId, UserId};
