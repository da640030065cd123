//! # jobs-api
//!
//! REST API server for job postings, trending, bookmarks, likes, comments
//! and shares, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_production_app, run, run_server};
pub use state::AppState;
