//! Database models - SQLx-compatible structs for PostgreSQL tables

mod interaction;
mod job;
mod session;
mod user;

pub use interaction::{CommentModel, JobCountModel, LikeModel, ShareModel};
pub use job::JobPostingModel;
pub use session::SessionModel;
pub use user::UserModel;
