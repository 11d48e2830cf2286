//! Request handlers, one module per route group

pub mod analytics;
pub mod auth;
pub mod health;
pub mod shoutouts;
pub mod users;
