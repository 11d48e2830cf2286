//! # brag-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface for the API crate
pub use dto::{
    AuthResponse, CommentAuthorResponse, CommentResponse, CreateCommentRequest,
    CreateShoutoutRequest, CurrentUserResponse, DepartmentCountResponse, FeedQuery, HealthResponse,
    LeaderboardEntryResponse, LoginRequest, LogoutRequest, ReadinessResponse, RefreshTokenRequest,
    RegisterRequest, ShoutoutResponse, UserResponse,
};
pub use services::{AuthService, FeedService, ServiceContext, ServiceError, ServiceResult};
