//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::NaiveDate;
use jobs_common::{hash_password, JwtService};
use jobs_core::traits::{JobRepository, UserRepository};
use jobs_core::{JobCategory, JobPosting, NewJobPosting, NewUser, UserId};
use jobs_db::MemoryStore;

use super::context::ServiceContext;

pub const TEST_PASSWORD: &str = "correct-horse-42";

pub struct TestContext {
    pub store: MemoryStore,
    pub ctx: ServiceContext,
}

impl TestContext {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let jwt = Arc::new(JwtService::new("test-secret-key-that-is-long-enough", 900, 3600));
        Self {
            ctx: ServiceContext::from_memory(store.clone(), jwt),
            store,
        }
    }
}

pub async fn seed_job(store: &MemoryStore, title: &str, category: JobCategory) -> JobPosting {
    let job = NewJobPosting::new(
        title,
        "Recruitment Board",
        10,
        NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        "Seeded for tests",
    )
    .with_category(category);
    JobRepository::create(store, &job).await.unwrap()
}

pub async fn seed_user(store: &MemoryStore, email: &str) -> UserId {
    let hash = hash_password(TEST_PASSWORD).unwrap();
    UserRepository::create(store, &NewUser::new(email, "Test", "User"), &hash)
        .await
        .unwrap()
        .id
}

pub async fn seed_staff(store: &MemoryStore, email: &str) -> UserId {
    let hash = hash_password(TEST_PASSWORD).unwrap();
    UserRepository::create(store, &NewUser::new(email, "Site", "Admin").staff(), &hash)
        .await
        .unwrap()
        .id
}
