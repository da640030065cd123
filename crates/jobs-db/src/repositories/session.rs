//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use jobs_core::entities::Session;
use jobs_core::traits::{RepoResult, SessionRepository};
use jobs_core::value_objects::UserId;

use crate::models::SessionModel;

use super::error::{map_db_error, map_reference_violation_for_user};

/// PostgreSQL implementation of SessionRepository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    async fn create(&self, session: &Session) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO sessions (session_id, user_id, created_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(session.session_id)
        .bind(session.user_id.into_inner())
        .bind(session.created_at)
        .bind(session.expires_at)
        .bind(session.revoked_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_reference_violation_for_user(e, session.user_id))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_active(&self, session_id: Uuid) -> RepoResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT session_id, user_id, created_at, expires_at, revoked_at
            FROM sessions
            WHERE session_id = $1 AND revoked_at IS NULL AND expires_at > NOW()
            ",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Session::from))
    }

    #[instrument(skip(self))]
    async fn revoke(&self, session_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE sessions
            SET revoked_at = NOW()
            WHERE session_id = $1 AND revoked_at IS NULL AND expires_at > NOW()
            ",
        )
        .bind(session_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE sessions
            SET revoked_at = NOW()
            WHERE user_id = $1 AND revoked_at IS NULL
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
