//! Test server and HTTP helpers

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use jobs_api::{create_app, run_server, AppState};
use jobs_common::{hash_password, AppConfig, JwtService};
use jobs_core::traits::{JobRepository, UserRepository};
use jobs_core::{JobCategory, JobId, NewJobPosting, NewUser, UserId};
use jobs_db::MemoryStore;
use jobs_service::ServiceContext;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789";

/// A running server and a handle on its backing store
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: MemoryStore,
    _handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        let store = MemoryStore::new();
        let jwt = Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry,
            config.jwt.refresh_token_expiry,
        ));
        let ctx = ServiceContext::from_memory(store.clone(), jwt);
        let app = create_app(AppState::new(ctx, config));

        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            run_server(app, listener).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn request(&self, method: reqwest::Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url(), path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.request(reqwest::Method::GET, path, None).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.request(reqwest::Method::GET, path, Some(token)).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::POST, path, None)
            .json(body)
            .send()
            .await?)
    }

    /// POST with no body, optionally signed in
    pub async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<Response> {
        Ok(self.request(reqwest::Method::POST, path, token).send().await?)
    }

    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::POST, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::DELETE, path, Some(token))
            .send()
            .await?)
    }

    /// Insert a posting straight into the store
    pub async fn seed_job(&self, title: &str, category: JobCategory) -> Result<JobId> {
        let last_date = NaiveDate::from_ymd_opt(2026, 12, 31).context("bad date")?;
        let job = NewJobPosting::new(title, "Recruitment Board", 25, last_date, "Seeded posting")
            .with_category(category);
        Ok(JobRepository::create(&self.store, &job).await?.id)
    }

    /// Insert a staff account straight into the store
    pub async fn seed_staff(&self, email: &str, password: &str) -> Result<UserId> {
        let hash = hash_password(password)?;
        let user = UserRepository::create(&self.store, &NewUser::new(email, "Site", "Admin").staff(), &hash)
            .await?;
        Ok(user.id)
    }
}

pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| match key {
        "API_PORT" => Some("0".to_string()),
        "DATABASE_URL" => Some("postgres://unused/in-memory".to_string()),
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert the status, then parse the JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
