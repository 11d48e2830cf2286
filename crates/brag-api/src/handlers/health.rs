//! Health check handlers
//!
//! Liveness and readiness probes. With a purely in-memory store there are
//! no external dependencies to check; readiness reports store stats.

use axum::{extract::State, Json};
use brag_service::{FeedService, HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with store stats
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let service = FeedService::new(state.service_context());
    let (shoutouts, users) = service.stats();
    Json(ReadinessResponse::ready(shoutouts, users))
}
