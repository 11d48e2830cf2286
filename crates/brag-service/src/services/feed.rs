//! Feed service
//!
//! Orchestrates the feed store: listing, posting, reactions, comments,
//! moderation, and the derived analytics views. The authenticated caller
//! is threaded through as the acting user on every mutation.

use brag_core::{FeedFilter, ReactionKind, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CommentResponse, CreateCommentRequest, CreateShoutoutRequest, DepartmentCountResponse,
    FeedQuery, LeaderboardEntryResponse, ShoutoutResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Sentinel department value meaning "no restriction"
const ALL_DEPARTMENTS: &str = "all";

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The filtered feed, newest first, rendered for the viewer
    #[instrument(skip(self))]
    pub async fn list_shoutouts(
        &self,
        viewer_id: Snowflake,
        query: FeedQuery,
    ) -> ServiceResult<Vec<ShoutoutResponse>> {
        let filter = FeedFilter::new(
            query.department.as_deref().unwrap_or(ALL_DEPARTMENTS),
            query.search.as_deref().unwrap_or(""),
        );

        let feed = self.ctx.feed().read();
        Ok(feed
            .filter_shoutouts(&filter)
            .map(|shoutout| ShoutoutResponse::with_viewer(shoutout, viewer_id))
            .collect())
    }

    /// Post a new shoutout from the authenticated sender
    #[instrument(skip(self, request), fields(sender = %sender_id))]
    pub async fn create_shoutout(
        &self,
        sender_id: Snowflake,
        request: CreateShoutoutRequest,
    ) -> ServiceResult<ShoutoutResponse> {
        let id = self.ctx.generate_id();

        let mut feed = self.ctx.feed().write();
        let shoutout =
            feed.create_shoutout(id, sender_id, &request.recipient_ids, &request.message)?;
        let response = ShoutoutResponse::with_viewer(shoutout, sender_id);

        info!(shoutout_id = %id, recipients = shoutout.recipients.len(), "Shoutout posted");
        Ok(response)
    }

    /// Toggle the caller's reaction of `kind` on a shoutout
    ///
    /// The raw kind string is parsed here so unknown kinds surface as
    /// validation errors before the store is touched.
    #[instrument(skip(self), fields(user = %user_id))]
    pub async fn toggle_reaction(
        &self,
        shoutout_id: Snowflake,
        user_id: Snowflake,
        kind: &str,
    ) -> ServiceResult<()> {
        let kind: ReactionKind = kind.parse()?;

        let added = self
            .ctx
            .feed()
            .write()
            .toggle_reaction(shoutout_id, user_id, kind)?;

        info!(shoutout_id = %shoutout_id, %kind, added, "Reaction toggled");
        Ok(())
    }

    /// Append a comment authored by the caller
    #[instrument(skip(self, request), fields(author = %author_id))]
    pub async fn add_comment(
        &self,
        shoutout_id: Snowflake,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment_id = self.ctx.generate_id();

        let comment = self.ctx.feed().write().add_comment(
            shoutout_id,
            comment_id,
            author_id,
            &request.text,
        )?;

        info!(shoutout_id = %shoutout_id, comment_id = %comment.id, "Comment added");
        Ok(CommentResponse::from(&comment))
    }

    /// Remove a shoutout permanently
    #[instrument(skip(self), fields(actor = %actor_id))]
    pub async fn delete_shoutout(
        &self,
        shoutout_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        self.ctx.feed().write().delete_shoutout(shoutout_id)?;

        info!(shoutout_id = %shoutout_id, "Shoutout deleted");
        Ok(())
    }

    /// Flag a shoutout for moderation (idempotent)
    #[instrument(skip(self), fields(actor = %actor_id))]
    pub async fn flag_shoutout(
        &self,
        shoutout_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        self.ctx.feed().write().flag_shoutout(shoutout_id)?;

        info!(shoutout_id = %shoutout_id, "Shoutout flagged");
        Ok(())
    }

    /// Top contributors by points
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> ServiceResult<Vec<LeaderboardEntryResponse>> {
        let feed = self.ctx.feed().read();
        Ok(feed
            .leaderboard()
            .iter()
            .map(LeaderboardEntryResponse::from)
            .collect())
    }

    /// Shoutout counts per sender department
    #[instrument(skip(self))]
    pub async fn department_histogram(&self) -> ServiceResult<Vec<DepartmentCountResponse>> {
        let feed = self.ctx.feed().read();
        Ok(feed
            .department_histogram()
            .iter()
            .map(DepartmentCountResponse::from)
            .collect())
    }

    /// The user directory (for recipient tagging)
    #[instrument(skip(self))]
    pub async fn users(&self) -> ServiceResult<Vec<UserResponse>> {
        let feed = self.ctx.feed().read();
        Ok(feed.users().iter().map(UserResponse::from).collect())
    }

    /// Unique department labels (for the filter dropdown)
    #[instrument(skip(self))]
    pub async fn departments(&self) -> ServiceResult<Vec<String>> {
        Ok(self.ctx.feed().read().departments())
    }

    /// Feed size stats for the readiness probe
    pub fn stats(&self) -> (usize, usize) {
        let feed = self.ctx.feed().read();
        (feed.len(), feed.users().len())
    }
}
