//! Request bodies and response shapes used by the end-to-end tests

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::helpers::{assert_json, TestServer};

static COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub const TEST_PASSWORD: &str = "Sarkari-Naukri-2024";

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "Ravi".to_string(),
            last_name: format!("Kumar{suffix}"),
            email: format!("aspirant{suffix}@example.com"),
            password: TEST_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role: None,
        }
    }

    pub fn admin(email: &str, password: &str) -> Self {
        Self {
            role: Some("admin".to_string()),
            ..Self::new(email, password)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub access: String,
    pub refresh: String,
    pub user: LoginUser,
}

#[derive(Debug, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub status: String,
    pub count: usize,
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ItemEnvelope<T> {
    pub status: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct JobBody {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub location: String,
    pub likes_count: i64,
    pub comments_count: i64,
    pub shares_count: i64,
    pub user_has_liked: bool,
    pub is_bookmarked: bool,
}

#[derive(Debug, Deserialize)]
pub struct TrendingEnvelope {
    pub message: String,
    pub count: usize,
    pub data: Vec<TrendingBody>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingBody {
    pub id: i64,
    pub title: String,
    pub posted_at: String,
    pub likes_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct BookmarkBody {
    pub status: String,
    pub message: String,
    pub bookmarked: bool,
}

#[derive(Debug, Deserialize)]
pub struct LikeBody {
    pub message: String,
    pub liked: bool,
    pub likes_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ShareBody {
    pub platform: String,
    pub user_id: Option<i64>,
    pub shares_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Register a fresh account and log it in
pub async fn register_and_login(server: &TestServer) -> Result<(RegisterRequest, LoginData)> {
    let request = RegisterRequest::unique();
    let response = server.post("/api/register", &request).await?;
    let _: serde_json::Value = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post("/api/login", &LoginRequest::new(&request.email, &request.password))
        .await?;
    let login: LoginResponse = assert_json(response, StatusCode::OK).await?;
    Ok((request, login.data))
}

/// Log in a seeded staff account as admin
pub async fn staff_login(server: &TestServer) -> Result<LoginData> {
    let email = format!("admin{}@example.com", unique_suffix());
    server.seed_staff(&email, TEST_PASSWORD).await?;
    let response = server
        .post("/api/login", &LoginRequest::admin(&email, TEST_PASSWORD))
        .await?;
    let login: LoginResponse = assert_json(response, StatusCode::OK).await?;
    Ok(login.data)
}
