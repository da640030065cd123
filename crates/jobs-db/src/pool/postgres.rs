//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use jobs_common::DatabaseConfig;

/// Table definitions, uniqueness constraints and cascades
pub const SCHEMA_SQL: &str = include_str!("../../schema/0001_initial.sql");

/// Connection pool tuning
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl PoolConfig {
    /// Pool settings for a URL with default sizing
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

impl From<&DatabaseConfig> for PoolConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            max_connections: config.max_connections,
            min_connections: config.min_connections.min(config.max_connections),
            ..Self::new(config.url.clone())
        }
    }
}

/// Create a new PostgreSQL connection pool
#[instrument(skip(config), fields(max = config.max_connections))]
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await?;

    info!("database pool ready");
    Ok(pool)
}

/// Create any missing tables and indexes. Every statement is idempotent.
#[instrument(skip(pool))]
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}

/// Round-trip a trivial query, used by readiness checks
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_app_config() {
        let app = DatabaseConfig {
            url: "postgres://localhost/jobs".to_string(),
            max_connections: 4,
            min_connections: 8,
        };
        let config = PoolConfig::from(&app);
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.min_connections, 4);
        assert_eq!(config.acquire_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_schema_declares_pair_constraints() {
        assert!(SCHEMA_SQL.contains("CONSTRAINT likes_user_job_key UNIQUE (user_id, job_id)"));
        assert!(SCHEMA_SQL.contains("CONSTRAINT bookmarks_user_job_key UNIQUE (user_id, job_id)"));
        assert!(SCHEMA_SQL.contains("CHECK (vacancies >= 0)"));
    }
}
