//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in jobs-core.

mod bookmark;
mod comment;
mod error;
mod job;
mod like;
mod session;
mod share;
mod toggle;
mod user;

pub use bookmark::PgBookmarkRepository;
pub use comment::PgCommentRepository;
pub use job::PgJobRepository;
pub use like::PgLikeRepository;
pub use session::PgSessionRepository;
pub use share::PgShareRepository;
pub use user::PgUserRepository;
