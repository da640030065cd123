//! Error handling utilities for repositories

use jobs_core::error::DomainError;
use jobs_core::value_objects::{JobId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Map a foreign-key violation on an interaction insert to the missing parent.
///
/// Constraint names follow the Postgres default `<table>_<column>_fkey`.
pub fn map_reference_violation(e: SqlxError, job_id: JobId, user_id: Option<UserId>) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            let constraint = db_err.constraint().unwrap_or_default();
            if constraint.ends_with("user_id_fkey") {
                if let Some(user_id) = user_id {
                    return DomainError::UserNotFound(user_id);
                }
            }
            return DomainError::JobNotFound(job_id);
        }
    }
    map_db_error(e)
}

pub fn job_not_found(id: JobId) -> DomainError {
    DomainError::JobNotFound(id)
}

pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Map a foreign-key violation on a user-owned row to `UserNotFound`
pub fn map_reference_violation_for_user(e: SqlxError, user_id: UserId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return user_not_found(user_id);
        }
    }
    map_db_error(e)
}
