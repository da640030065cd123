//! # jobs-db
//!
//! Entity store adapters for the repository traits defined in `jobs-core`.
//!
//! - PostgreSQL repositories via SQLx, with models and model -> entity mappers
//! - The schema carrying the (user, job) uniqueness constraints and cascades
//! - [`MemoryStore`], an in-process store with the same semantics for tests
//!   and local runs
//!
//! ```rust,ignore
//! use jobs_db::{create_pool, PgJobRepository, PoolConfig};
//!
//! let pool = create_pool(&PoolConfig::new(url)).await?;
//! let jobs = PgJobRepository::new(pool);
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryBookmarks, MemoryLikes, MemoryStore};
pub use pool::{apply_schema, create_pool, ping, PgPool, PoolConfig, SCHEMA_SQL};
pub use repositories::{
    PgBookmarkRepository, PgCommentRepository, PgJobRepository, PgLikeRepository,
    PgSessionRepository, PgShareRepository, PgUserRepository,
};
