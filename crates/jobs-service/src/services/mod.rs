//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of a call and
//! works only through its repository ports.

pub mod auth;
pub mod context;
pub mod engagement;
pub mod error;
pub mod feed;
pub mod job;
pub mod trending;
pub mod user;

#[cfg(test)]
mod test_support;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use job::JobService;
pub use trending::TrendingService;
pub use user::UserService;
