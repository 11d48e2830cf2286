//! Mappers from domain entities to response DTOs

use brag_core::{
    Comment, DepartmentCount, LeaderboardEntry, Shoutout, Snowflake, User,
};
use brag_store::Account;

use super::responses::{
    CommentAuthorResponse, CommentResponse, CurrentUserResponse, DepartmentCountResponse,
    LeaderboardEntryResponse, ShoutoutResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            department: user.department.clone(),
        }
    }
}

impl CurrentUserResponse {
    /// Combine the public profile with the account record
    pub fn new(user: &User, account: &Account) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: account.email.clone(),
            department: user.department.clone(),
            role: account.role,
            created_at: account.created_at,
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            author: CommentAuthorResponse {
                id: comment.author.id.to_string(),
                name: comment.author.name.clone(),
            },
            text: comment.text.clone(),
        }
    }
}

impl ShoutoutResponse {
    /// Render a shoutout from one viewer's perspective
    pub fn with_viewer(shoutout: &Shoutout, viewer: Snowflake) -> Self {
        Self {
            id: shoutout.id.to_string(),
            sender: UserResponse::from(&shoutout.sender),
            recipients: shoutout.recipients.iter().map(UserResponse::from).collect(),
            message: shoutout.message.clone(),
            created_at: shoutout.created_at,
            reactions: shoutout.reactions,
            viewer_reactions: shoutout.reactions_of(viewer),
            comments: shoutout.comments.iter().map(CommentResponse::from).collect(),
            flagged: shoutout.flagged,
        }
    }
}

impl From<&LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            user_id: entry.user_id.to_string(),
            name: entry.name.clone(),
            points: entry.points,
        }
    }
}

impl From<&DepartmentCount> for DepartmentCountResponse {
    fn from(bucket: &DepartmentCount) -> Self {
        Self {
            department: bucket.department.clone(),
            count: bucket.count,
        }
    }
}
