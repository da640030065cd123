//! Service context - dependency container for services
//!
//! Holds every repository port, the optional PostgreSQL pool (for readiness
//! checks) and the JWT service. Services borrow it for the duration of a call.

use std::sync::Arc;

use jobs_common::auth::JwtService;
use jobs_core::traits::{
    BookmarkRepository, CommentRepository, JobRepository, LikeRepository, SessionRepository,
    ShareRepository, UserRepository,
};
use jobs_db::{
    MemoryStore, PgBookmarkRepository, PgCommentRepository, PgJobRepository, PgLikeRepository,
    PgPool, PgSessionRepository, PgShareRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Present only when backed by PostgreSQL
    pool: Option<PgPool>,

    job_repo: Arc<dyn JobRepository>,
    like_repo: Arc<dyn LikeRepository>,
    bookmark_repo: Arc<dyn BookmarkRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    share_repo: Arc<dyn ShareRepository>,
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Wire every port to its PostgreSQL repository
    pub fn from_pool(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            job_repo: Arc::new(PgJobRepository::new(pool.clone())),
            like_repo: Arc::new(PgLikeRepository::new(pool.clone())),
            bookmark_repo: Arc::new(PgBookmarkRepository::new(pool.clone())),
            comment_repo: Arc::new(PgCommentRepository::new(pool.clone())),
            share_repo: Arc::new(PgShareRepository::new(pool.clone())),
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            session_repo: Arc::new(PgSessionRepository::new(pool.clone())),
            pool: Some(pool),
            jwt_service,
        }
    }

    /// Wire every port to one shared in-memory store
    pub fn from_memory(store: MemoryStore, jwt_service: Arc<JwtService>) -> Self {
        Self {
            pool: None,
            job_repo: Arc::new(store.clone()),
            like_repo: Arc::new(store.likes()),
            bookmark_repo: Arc::new(store.bookmarks()),
            comment_repo: Arc::new(store.clone()),
            share_repo: Arc::new(store.clone()),
            user_repo: Arc::new(store.clone()),
            session_repo: Arc::new(store),
            jwt_service,
        }
    }

    // === Database Pool ===

    /// The PostgreSQL pool, if this context is backed by one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn job_repo(&self) -> &dyn JobRepository {
        self.job_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    pub fn bookmark_repo(&self) -> &dyn BookmarkRepository {
        self.bookmark_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn share_repo(&self) -> &dyn ShareRepository {
        self.share_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for a ServiceContext with hand-picked repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    job_repo: Option<Arc<dyn JobRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    bookmark_repo: Option<Arc<dyn BookmarkRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    share_repo: Option<Arc<dyn ShareRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn job_repo(mut self, repo: Arc<dyn JobRepository>) -> Self {
        self.job_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn bookmark_repo(mut self, repo: Arc<dyn BookmarkRepository>) -> Self {
        self.bookmark_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn share_repo(mut self, repo: Arc<dyn ShareRepository>) -> Self {
        self.share_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` naming the first missing dependency
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            job_repo: required(self.job_repo, "job_repo")?,
            like_repo: required(self.like_repo, "like_repo")?,
            bookmark_repo: required(self.bookmark_repo, "bookmark_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            share_repo: required(self.share_repo, "share_repo")?,
            user_repo: required(self.user_repo, "user_repo")?,
            session_repo: required(self.session_repo, "session_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
        })
    }
}
