//! Account directory
//!
//! Credentials and roles for registered users, keyed by normalized email.
//! The feed store's user directory holds the public profile; this store
//! holds everything the feed must never see (password hashes).

use brag_core::Snowflake;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Account role, carried for display only (authorization is not enforced)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

impl Role {
    /// Wire name of this role
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account
#[derive(Debug, Clone)]
pub struct Account {
    pub user_id: Snowflake,
    /// Stored normalized (trimmed, lowercased)
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account; the email is normalized here
    pub fn new(
        user_id: Snowflake,
        email: &str,
        password_hash: String,
        role: Role,
    ) -> Self {
        Self {
            user_id,
            email: normalize_email(email),
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }
}

/// Account store errors
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,
}

/// In-memory account directory
#[derive(Debug, Default)]
pub struct AccountStore {
    by_email: DashMap<String, Account>,
    email_by_id: DashMap<Snowflake, String>,
}

impl AccountStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account; fails if the email is taken
    pub fn insert(&self, account: Account) -> Result<(), AccountError> {
        use dashmap::mapref::entry::Entry;

        match self.by_email.entry(account.email.clone()) {
            Entry::Occupied(_) => Err(AccountError::EmailAlreadyRegistered),
            Entry::Vacant(slot) => {
                self.email_by_id.insert(account.user_id, account.email.clone());
                tracing::debug!(user_id = %account.user_id, "Account registered");
                slot.insert(account);
                Ok(())
            }
        }
    }

    /// Check whether an email is already registered
    pub fn email_exists(&self, email: &str) -> bool {
        self.by_email.contains_key(&normalize_email(email))
    }

    /// Look up an account by email
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        self.by_email
            .get(&normalize_email(email))
            .map(|entry| entry.value().clone())
    }

    /// Look up an account by user id
    pub fn find_by_user_id(&self, user_id: Snowflake) -> Option<Account> {
        let email = self.email_by_id.get(&user_id)?.value().clone();
        self.by_email.get(&email).map(|entry| entry.value().clone())
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    /// Whether any accounts exist
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
