//! Request DTOs for API endpoints
//!
//! All request bodies implement `Deserialize` and `Validate` for input
//! validation at the extractor boundary.

use brag_core::Snowflake;
use brag_store::Role;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(max = 100, message = "Department must be at most 100 characters"))]
    pub department: Option<String>,

    /// Account role; defaults to employee
    #[serde(default)]
    pub role: Option<Role>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke; absent revokes all)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Feed Requests
// ============================================================================

/// Create shoutout request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShoutoutRequest {
    #[validate(length(min = 1, max = 500, message = "Message must be 1-500 characters"))]
    pub message: String,

    /// Recipient user ids; empty means "everyone"
    #[serde(default)]
    pub recipient_ids: Vec<Snowflake>,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1-500 characters"))]
    pub text: String,
}

/// Feed filter query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    /// Department filter; absent or "all" means no restriction
    pub department: Option<String>,
    /// Search text over messages and names
    pub search: Option<String>,
}
