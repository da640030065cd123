//! Server setup and initialization

use std::sync::Arc;

use axum::Router;
use jobs_common::{AppConfig, AppError, JwtService};
use jobs_db::{apply_schema, create_pool, PoolConfig};
use jobs_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Routes with request id, tracing and timeout layers but no rate limiter
pub fn create_app(state: AppState) -> Router {
    apply_middleware(create_router().merge(health_routes())).with_state(state)
}

/// Routes behind the full production stack. Health probes bypass the limiter.
pub fn create_production_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api
        .merge(apply_middleware(health_routes()))
        .with_state(state))
}

/// Connect to PostgreSQL, make sure the schema exists and wire the services
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    apply_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let service_context = ServiceContext::from_pool(pool, jwt_service);
    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener until the process stops
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Listener has no address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_production_app(state)?;

    run_server(app, listener).await
}
