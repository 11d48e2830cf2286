//! Data transfer objects for API requests and responses
//!
//! Request DTOs carry `validator` annotations enforced at the API
//! boundary; response DTOs serialize domain entities with Snowflake ids
//! as strings.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateShoutoutRequest, FeedQuery, LoginRequest, LogoutRequest,
    RefreshTokenRequest, RegisterRequest,
};
pub use responses::{
    AuthResponse, CommentAuthorResponse, CommentResponse, CurrentUserResponse,
    DepartmentCountResponse, HealthResponse, LeaderboardEntryResponse, ReadinessResponse,
    ShoutoutResponse, UserResponse,
};
