//! # jobs-service
//!
//! Application layer: the service context, the engagement and auth use cases,
//! and the request/response DTOs exchanged with the HTTP layer.

pub mod dto;
pub mod services;

pub use dto::{
    AccessTokenResponse, BookmarkToggleResponse, CommentResponse, CreateCommentRequest,
    CreateJobRequest, HealthResponse, JobListQuery, JobResponse, LikeToggleResponse,
    LoginRequest, LoginResponse, LogoutRequest, MessageResponse, ReadinessResponse,
    RefreshTokenRequest, RegisterRequest, RegisterResponse, ShareJobRequest, ShareResponse,
    SuccessResponse, TrendingJobResponse, TrendingListResponse, UserResponse,
};
pub use services::{
    AuthService, EngagementService, FeedService, JobService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TrendingService, UserService,
};
