//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BookmarkRepository, CommentRepository, JobRepository, LikeRepository, RepoResult,
    SessionRepository, ShareRepository, ToggleRelation, UserRepository,
};
