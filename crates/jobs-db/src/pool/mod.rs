//! Database connection pool management

mod postgres;

pub use postgres::{apply_schema, create_pool, ping, PoolConfig, SCHEMA_SQL};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
