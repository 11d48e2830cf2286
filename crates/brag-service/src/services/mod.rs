//! Business logic services
//!
//! Services validate input, orchestrate the feed store and the auth
//! infrastructure, and translate domain results into DTOs.

pub mod auth;
pub mod context;
pub mod error;
pub mod feed;

pub use auth::AuthService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
