//! Server setup and initialization
//!
//! Builds the application state (stores, JWT service, id generator),
//! assembles the router, and runs the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use brag_common::{AppConfig, AppError, JwtService};
use brag_core::{FeedStore, SnowflakeGenerator};
use brag_service::ServiceContext;
use brag_store::{seed_demo_feed, AccountStore, RefreshTokenStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    // Health endpoints stay outside the rate limiter
    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let mut feed = FeedStore::new();
    if config.feed.seed_demo_data {
        seed_demo_feed(&mut feed, &snowflake_generator)?;
    }

    let accounts = Arc::new(AccountStore::new());
    let refresh_tokens = Arc::new(RefreshTokenStore::with_ttl(
        config.jwt.refresh_token_expiry.max(0) as u64,
    ));

    let service_context = ServiceContext::new(
        feed,
        accounts,
        refresh_tokens,
        jwt_service,
        snowflake_generator,
    );

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(config)?;
    let app = create_app(state);

    run_server(app, addr).await
}
