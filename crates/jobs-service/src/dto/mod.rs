//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from domain entities to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateJobRequest, JobListQuery, LoginRequest, LogoutRequest,
    RefreshTokenRequest, RegisterRequest, ShareJobRequest,
};

pub use responses::{
    AccessTokenResponse, BookmarkToggleResponse, CommentResponse, HealthChecks, HealthResponse,
    JobResponse, LikeToggleResponse, LoginData, LoginResponse, LoginUserResponse,
    MessageResponse, ReadinessResponse, RegisterResponse, RegisteredUserResponse, ShareResponse,
    SuccessResponse, TrendingJobResponse, TrendingListResponse, UserResponse,
};

pub use mappers::TRENDING_DATE_FORMAT;
