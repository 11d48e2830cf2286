//! Service context - dependency container for services
//!
//! Holds the feed store (behind its serializing lock), the auth
//! infrastructure, and the id generator. The context is the sole owner of
//! the write path into the feed store.

use std::sync::Arc;

use brag_common::auth::JwtService;
use brag_core::{FeedStore, Snowflake, SnowflakeGenerator};
use brag_store::{AccountStore, RefreshTokenStore};
use parking_lot::RwLock;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    feed: Arc<RwLock<FeedStore>>,
    accounts: Arc<AccountStore>,
    refresh_tokens: Arc<RefreshTokenStore>,
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        feed: FeedStore,
        accounts: Arc<AccountStore>,
        refresh_tokens: Arc<RefreshTokenStore>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            feed: Arc::new(RwLock::new(feed)),
            accounts,
            refresh_tokens,
            jwt_service,
            snowflake_generator,
        }
    }

    /// The feed store, behind its lock
    pub fn feed(&self) -> &RwLock<FeedStore> {
        &self.feed
    }

    /// The account directory
    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    /// The refresh-token session store
    pub fn refresh_tokens(&self) -> &RefreshTokenStore {
        &self.refresh_tokens
    }

    /// The JWT service
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Generate a fresh unique id
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}
