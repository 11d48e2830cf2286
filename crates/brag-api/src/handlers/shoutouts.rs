//! Shoutout feed handlers
//!
//! Endpoints for listing and posting shoutouts, toggling reactions,
//! commenting, and moderation (delete/flag).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use brag_core::Snowflake;
use brag_service::{
    CommentResponse, CreateCommentRequest, CreateShoutoutRequest, FeedQuery, FeedService,
    ShoutoutResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_shoutout_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid shoutout_id format"))
}

/// List the feed, filtered and rendered for the caller
///
/// GET /shoutouts?department=<dept|all>&search=<text>
pub async fn list_shoutouts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<FeedQuery>,
) -> ApiResult<Json<Vec<ShoutoutResponse>>> {
    let service = FeedService::new(state.service_context());
    let feed = service.list_shoutouts(auth.user_id, query).await?;
    Ok(Json(feed))
}

/// Post a new shoutout
///
/// POST /shoutouts
pub async fn create_shoutout(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateShoutoutRequest>,
) -> ApiResult<Created<Json<ShoutoutResponse>>> {
    let service = FeedService::new(state.service_context());
    let shoutout = service.create_shoutout(auth.user_id, request).await?;
    Ok(Created(Json(shoutout)))
}

/// Toggle the caller's reaction on a shoutout
///
/// PUT /shoutouts/{shoutout_id}/reactions/{kind}/@me
pub async fn toggle_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((shoutout_id, kind)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let shoutout_id = parse_shoutout_id(&shoutout_id)?;

    let service = FeedService::new(state.service_context());
    service
        .toggle_reaction(shoutout_id, auth.user_id, &kind)
        .await?;
    Ok(NoContent)
}

/// Comment on a shoutout
///
/// POST /shoutouts/{shoutout_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(shoutout_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let shoutout_id = parse_shoutout_id(&shoutout_id)?;

    let service = FeedService::new(state.service_context());
    let comment = service
        .add_comment(shoutout_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(comment)))
}

/// Delete a shoutout
///
/// DELETE /shoutouts/{shoutout_id}
pub async fn delete_shoutout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(shoutout_id): Path<String>,
) -> ApiResult<NoContent> {
    let shoutout_id = parse_shoutout_id(&shoutout_id)?;

    let service = FeedService::new(state.service_context());
    service.delete_shoutout(shoutout_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Flag a shoutout for moderation
///
/// POST /shoutouts/{shoutout_id}/flag
pub async fn flag_shoutout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(shoutout_id): Path<String>,
) -> ApiResult<NoContent> {
    let shoutout_id = parse_shoutout_id(&shoutout_id)?;

    let service = FeedService::new(state.service_context());
    service.flag_shoutout(shoutout_id, auth.user_id).await?;
    Ok(NoContent)
}
