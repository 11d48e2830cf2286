//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize`. Snowflake ids are serialized
//! as strings for JavaScript compatibility.

use brag_core::{ReactionCounts, ReactionKind};
use brag_store::Role;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens and the caller's profile
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Current authenticated user profile (includes email and role)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Directory Responses
// ============================================================================

/// Public user entry (directory listing, senders, recipients)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub department: String,
}

// ============================================================================
// Feed Responses
// ============================================================================

/// A shoutout as seen by one viewer
#[derive(Debug, Serialize)]
pub struct ShoutoutResponse {
    pub id: String,
    pub sender: UserResponse,
    /// Empty means "addressed to everyone"
    pub recipients: Vec<UserResponse>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub reactions: ReactionCounts,
    /// The reaction kinds the viewer currently has applied
    pub viewer_reactions: Vec<ReactionKind>,
    pub comments: Vec<CommentResponse>,
    pub flagged: bool,
}

/// A comment under a shoutout
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: CommentAuthorResponse,
    pub text: String,
}

/// Minimal comment author reference
#[derive(Debug, Clone, Serialize)]
pub struct CommentAuthorResponse {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Analytics Responses
// ============================================================================

/// A leaderboard row
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntryResponse {
    pub user_id: String,
    pub name: String,
    pub points: u32,
}

/// A department histogram bucket
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentCountResponse {
    pub department: String,
    pub count: usize,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with store stats
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub shoutouts: usize,
    pub users: usize,
}

impl ReadinessResponse {
    pub fn ready(shoutouts: usize, users: usize) -> Self {
        Self {
            status: "ok",
            shoutouts,
            users,
        }
    }
}
