//! Interaction model -> entity mappers

use std::collections::HashMap;

use jobs_core::entities::{Comment, Like, Share};
use jobs_core::value_objects::{CommentId, JobId, LikeId, ShareId, UserId};

use crate::models::{CommentModel, JobCountModel, LikeModel, ShareModel};

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: LikeId::new(model.id),
            job_id: JobId::new(model.job_id),
            user_id: model.user_id.map(UserId::new),
            created_at: model.created_at,
        }
    }
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            job_id: JobId::new(model.job_id),
            user_id: UserId::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<ShareModel> for Share {
    fn from(model: ShareModel) -> Self {
        Share {
            id: ShareId::new(model.id),
            job_id: JobId::new(model.job_id),
            user_id: model.user_id.map(UserId::new),
            platform: model.platform,
            created_at: model.created_at,
        }
    }
}

/// Collect grouped count rows into a map keyed by job
pub fn counts_to_map(rows: Vec<JobCountModel>) -> HashMap<JobId, i64> {
    rows.into_iter()
        .map(|row| (JobId::new(row.job_id), row.count))
        .collect()
}
