//! End-to-end helpers for the jobs API
//!
//! Each [`TestServer`] runs the real router on an ephemeral port over its own
//! in-memory store, so tests need no database and never share state.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
