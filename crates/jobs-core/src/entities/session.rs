//! Refresh-token session
//!
//! A session is opened at login and named by the `session_id` claim carried in
//! the refresh token. Logout revokes it, after which the refresh token is dead
//! even though its signature is still valid.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Open a new session lasting `ttl`
    pub fn open(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            created_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    /// Active means not revoked and not yet expired at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }
}
