//! Refresh token session store
//!
//! Tracks issued refresh tokens so they can be rotated and revoked.
//! Expiry is checked on access; expired entries are dropped lazily.

use brag_core::Snowflake;
use chrono::Utc;
use dashmap::DashMap;

/// Default TTL for refresh tokens (7 days)
const DEFAULT_REFRESH_TOKEN_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored refresh token data
#[derive(Debug, Clone)]
pub struct RefreshTokenData {
    /// User this token belongs to
    pub user_id: Snowflake,
    /// Session ID (for tracking multiple sessions per user)
    pub session_id: String,
    /// Token creation timestamp (Unix epoch seconds)
    pub created_at: i64,
    /// Expiry timestamp (Unix epoch seconds)
    pub expires_at: i64,
}

impl RefreshTokenData {
    /// Whether this token is past its expiry
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}

/// In-memory store of active refresh tokens
#[derive(Debug)]
pub struct RefreshTokenStore {
    tokens: DashMap<String, RefreshTokenData>,
    ttl_seconds: u64,
}

impl RefreshTokenStore {
    /// Create a store with the default TTL
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_REFRESH_TOKEN_TTL)
    }

    /// Create a store with a custom TTL (seconds)
    #[must_use]
    pub fn with_ttl(ttl_seconds: u64) -> Self {
        Self {
            tokens: DashMap::new(),
            ttl_seconds,
        }
    }

    /// Store a refresh token for a user session
    pub fn store(&self, token: &str, user_id: Snowflake, session_id: String) {
        let now = Utc::now().timestamp();
        let data = RefreshTokenData {
            user_id,
            session_id,
            created_at: now,
            expires_at: now + self.ttl_seconds as i64,
        };

        tracing::debug!(
            user_id = %user_id,
            session_id = %data.session_id,
            "Stored refresh token"
        );
        self.tokens.insert(token.to_string(), data);
    }

    /// Validate a token, returning its data if present and not expired
    ///
    /// Expired tokens are removed as a side effect.
    pub fn validate(&self, token: &str) -> Option<RefreshTokenData> {
        let data = self.tokens.get(token)?.value().clone();
        if data.is_expired() {
            self.tokens.remove(token);
            return None;
        }
        Some(data)
    }

    /// Revoke a single token; returns whether it existed
    pub fn revoke(&self, token: &str) -> bool {
        let removed = self.tokens.remove(token).is_some();
        if removed {
            tracing::debug!("Revoked refresh token");
        }
        removed
    }

    /// Revoke every token for a user (logout from all sessions)
    pub fn revoke_all_for_user(&self, user_id: Snowflake) -> u32 {
        let before = self.tokens.len();
        self.tokens.retain(|_, data| data.user_id != user_id);
        let count = (before - self.tokens.len()) as u32;

        tracing::info!(user_id = %user_id, count, "Revoked all refresh tokens for user");
        count
    }

    /// Drop every expired entry
    pub fn purge_expired(&self) -> u32 {
        let before = self.tokens.len();
        self.tokens.retain(|_, data| !data.is_expired());
        (before - self.tokens.len()) as u32
    }

    /// Number of tracked tokens (including not-yet-purged expired ones)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for RefreshTokenStore {
    fn default() -> Self {
        Self::new()
    }
}
