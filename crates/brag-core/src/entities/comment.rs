//! Comment entity - a reply under a shoutout

use crate::value_objects::Snowflake;

/// Minimal author reference carried on a comment (id + display name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor {
    pub id: Snowflake,
    pub name: String,
}

/// Comment entity
///
/// Comments are append-only: never edited, never removed. Their order is
/// the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub author: CommentAuthor,
    pub text: String,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, author_id: Snowflake, author_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            author: CommentAuthor {
                id: author_id,
                name: author_name.into(),
            },
            text: text.into(),
        }
    }
}
