//! Liveness and readiness probes

use axum::{extract::State, http::StatusCode, Json};
use jobs_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /health/ready
///
/// Pings PostgreSQL when the server runs against it. The in-memory store is
/// always ready.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = match state.service_context().pool() {
        Some(pool) => match jobs_db::ping(pool).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database readiness check failed");
                false
            }
        },
        None => true,
    };

    let response = ReadinessResponse::ready(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
