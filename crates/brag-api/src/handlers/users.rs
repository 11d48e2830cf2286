//! User directory handlers

use axum::{extract::State, Json};
use brag_service::{FeedService, UserResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// The user directory (for recipient tagging)
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = FeedService::new(state.service_context());
    let users = service.users().await?;
    Ok(Json(users))
}

/// Unique department labels (for the feed filter)
///
/// GET /departments
pub async fn list_departments(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<String>>> {
    let service = FeedService::new(state.service_context());
    let departments = service.departments().await?;
    Ok(Json(departments))
}
