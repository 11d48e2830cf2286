//! Analytics handlers - leaderboard and department histogram

use axum::{extract::State, Json};
use brag_service::{DepartmentCountResponse, FeedService, LeaderboardEntryResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Top contributors by points
///
/// GET /leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<LeaderboardEntryResponse>>> {
    let service = FeedService::new(state.service_context());
    let board = service.leaderboard().await?;
    Ok(Json(board))
}

/// Shoutout counts per sender department
///
/// GET /analytics/departments
pub async fn department_histogram(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<DepartmentCountResponse>>> {
    let service = FeedService::new(state.service_context());
    let histogram = service.department_histogram().await?;
    Ok(Json(histogram))
}
