//! Domain entities - core business objects

mod interaction;
mod job;
mod session;
mod user;

pub use interaction::{
    validate_comment_content, validate_share_platform, Bookmark, Comment, Like, Share,
    MAX_COMMENT_LENGTH, MAX_PLATFORM_LENGTH,
};
pub use job::{JobCategory, JobPosting, NewJobPosting, DEFAULT_LOCATION};
pub use session::Session;
pub use user::{NewUser, User};
