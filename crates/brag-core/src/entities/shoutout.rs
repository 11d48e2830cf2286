//! Shoutout entity - a recognition message on the board

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::entities::{Comment, User};
use crate::value_objects::{ReactionCounts, ReactionKind, Snowflake};

/// Shoutout entity
///
/// Reaction state is double-bookkept: `reactions` holds the per-kind
/// tallies, `reacted_by` the per-user membership sets. The store keeps
/// both in lockstep; `membership_count` exists so tests can assert it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoutout {
    pub id: Snowflake,
    pub sender: User,
    /// Empty means "addressed to everyone"
    pub recipients: Vec<User>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub reactions: ReactionCounts,
    pub reacted_by: HashMap<Snowflake, HashSet<ReactionKind>>,
    pub comments: Vec<Comment>,
    /// Monotonic: once flagged, never unflagged
    pub flagged: bool,
}

impl Shoutout {
    /// Create a new Shoutout with no reactions, comments, or flag
    pub fn new(id: Snowflake, sender: User, recipients: Vec<User>, message: String) -> Self {
        Self {
            id,
            sender,
            recipients,
            message,
            created_at: Utc::now(),
            reactions: ReactionCounts::default(),
            reacted_by: HashMap::new(),
            comments: Vec::new(),
            flagged: false,
        }
    }

    /// Check whether a user currently has the given reaction applied
    #[inline]
    pub fn has_reacted(&self, user_id: Snowflake, kind: ReactionKind) -> bool {
        self.reacted_by
            .get(&user_id)
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    /// The set of kinds a user currently has applied
    pub fn reactions_of(&self, user_id: Snowflake) -> Vec<ReactionKind> {
        ReactionKind::ALL
            .into_iter()
            .filter(|kind| self.has_reacted(user_id, *kind))
            .collect()
    }

    /// Check whether the shoutout is addressed to everyone
    #[inline]
    pub fn is_for_everyone(&self) -> bool {
        self.recipients.is_empty()
    }

    /// Number of users whose membership set contains `kind`
    ///
    /// Always equal to `self.reactions.count(kind)` when mutated through
    /// the feed store.
    pub fn membership_count(&self, kind: ReactionKind) -> usize {
        self.reacted_by
            .values()
            .filter(|kinds| kinds.contains(&kind))
            .count()
    }
}
