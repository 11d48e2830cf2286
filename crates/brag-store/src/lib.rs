//! # brag-store
//!
//! In-memory infrastructure for the recognition board: the account
//! directory (credentials and roles), the refresh-token session store,
//! and demo-data seeding. Everything here is process-local; persistence
//! is out of scope for this system.

pub mod accounts;
pub mod seed;
pub mod session;

pub use accounts::{Account, AccountError, AccountStore, Role};
pub use seed::{demo_users, seed_demo_feed};
pub use session::{RefreshTokenData, RefreshTokenStore};
