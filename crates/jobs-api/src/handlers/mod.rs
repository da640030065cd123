//! Route handlers, one module per area

pub mod auth;
pub mod engagement;
pub mod health;
pub mod jobs;
pub mod users;
