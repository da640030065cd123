//! Model to entity mappers
//!
//! `From<Model> for Entity` for every table, except job postings whose
//! category column is parsed and may fail.

mod interaction;
mod job;
mod session;
mod user;

pub use interaction::counts_to_map;
pub use job::ids_to_raw;
