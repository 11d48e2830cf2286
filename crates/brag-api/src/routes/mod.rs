//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{analytics, auth, health, shoutouts, users};
use crate::state::AppState;

/// Create the main API router (health lives separately, outside rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(shoutout_routes())
        .merge(directory_routes())
        .merge(analytics_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::current_user))
}

/// Shoutout feed routes
fn shoutout_routes() -> Router<AppState> {
    Router::new()
        .route("/shoutouts", get(shoutouts::list_shoutouts))
        .route("/shoutouts", post(shoutouts::create_shoutout))
        .route("/shoutouts/:shoutout_id", delete(shoutouts::delete_shoutout))
        .route("/shoutouts/:shoutout_id/flag", post(shoutouts::flag_shoutout))
        .route("/shoutouts/:shoutout_id/comments", post(shoutouts::add_comment))
        .route(
            "/shoutouts/:shoutout_id/reactions/:kind/@me",
            put(shoutouts::toggle_reaction),
        )
}

/// User directory routes
fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/departments", get(users::list_departments))
}

/// Analytics routes
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(analytics::leaderboard))
        .route("/analytics/departments", get(analytics::department_histogram))
}
