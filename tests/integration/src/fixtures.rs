//! Test fixtures and data generators

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            department: Some("Engineering".to_string()),
            role: None,
        }
    }

    pub fn with_department(department: &str) -> Self {
        Self {
            department: Some(department.to_string()),
            ..Self::unique()
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Refresh request
#[derive(Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Create shoutout request
#[derive(Debug, Serialize)]
pub struct CreateShoutoutRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipient_ids: Vec<String>,
}

impl CreateShoutoutRequest {
    pub fn broadcast(message: &str) -> Self {
        Self {
            message: message.to_string(),
            recipient_ids: vec![],
        }
    }

    pub fn to_users(message: &str, recipient_ids: Vec<String>) -> Self {
        Self {
            message: message.to_string(),
            recipient_ids,
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

// ============================================================================
// Response mirrors
// ============================================================================

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Current user profile
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub created_at: String,
}

/// User directory entry
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub department: String,
}

/// Reaction counts
#[derive(Debug, Deserialize)]
pub struct ReactionCounts {
    pub like: u32,
    pub clap: u32,
    pub star: u32,
}

/// Shoutout entry
#[derive(Debug, Deserialize)]
pub struct ShoutoutResponse {
    pub id: String,
    pub sender: UserResponse,
    pub recipients: Vec<UserResponse>,
    pub message: String,
    pub created_at: String,
    pub reactions: ReactionCounts,
    pub viewer_reactions: Vec<String>,
    pub comments: Vec<CommentResponse>,
    pub flagged: bool,
}

/// Comment entry
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: CommentAuthorResponse,
    pub text: String,
}

/// Comment author
#[derive(Debug, Deserialize)]
pub struct CommentAuthorResponse {
    pub id: String,
    pub name: String,
}

/// Leaderboard row
#[derive(Debug, Deserialize)]
pub struct LeaderboardEntryResponse {
    pub user_id: String,
    pub name: String,
    pub points: u32,
}

/// Department histogram bucket
#[derive(Debug, Deserialize)]
pub struct DepartmentCountResponse {
    pub department: String,
    pub count: usize,
}
