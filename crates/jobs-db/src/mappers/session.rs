//! Session model -> entity mapper

use jobs_core::entities::Session;
use jobs_core::value_objects::UserId;

use crate::models::SessionModel;

impl From<SessionModel> for Session {
    fn from(model: SessionModel) -> Self {
        Session {
            session_id: model.session_id,
            user_id: UserId::new(model.user_id),
            created_at: model.created_at,
            expires_at: model.expires_at,
            revoked_at: model.revoked_at,
        }
    }
}
