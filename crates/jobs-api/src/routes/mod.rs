//! Route definitions
//!
//! Every API route lives under `/api`; the health probes sit at the root so
//! they can skip rate limiting.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, engagement, health, jobs, users};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(job_routes())
        .merge(engagement_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/token/refresh", post(auth::refresh_token))
        .route("/profile", get(users::get_profile).delete(users::delete_profile))
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/jobs/:job_id", get(jobs::get_job).delete(jobs::delete_job))
        .route("/trending", get(jobs::trending))
}

fn engagement_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs/:job_id/bookmark", post(engagement::toggle_bookmark))
        .route("/jobs/:job_id/like", post(engagement::like_job))
        .route(
            "/jobs/:job_id/comments",
            get(engagement::list_comments).post(engagement::add_comment),
        )
        .route(
            "/jobs/:job_id/comments/:comment_id",
            delete(engagement::delete_comment),
        )
        .route("/jobs/:job_id/share", post(engagement::share_job))
}
