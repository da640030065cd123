//! Axum extractors for authentication, validated bodies and path ids

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::{CommentPath, JobPath};
pub use validated::{OptionalValidatedJson, ValidatedJson};
