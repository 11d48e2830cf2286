//! The recognition feed store
//!
//! An explicit, owned container for the user directory and the shoutout
//! feed. There is no global instance: whoever owns the store (in practice
//! the service layer, behind a lock) is its sole mutator, and the acting
//! user is always an explicit parameter.
//!
//! Every operation either completes with its full effect or fails leaving
//! the store untouched; in particular the reaction tallies and the
//! per-user membership sets are always updated together.

pub mod filter;

pub use filter::{DepartmentFilter, FeedFilter};

use std::collections::{HashMap, HashSet};

use crate::entities::{Comment, Shoutout, User};
use crate::error::DomainError;
use crate::value_objects::{ReactionKind, Snowflake};

/// Points awarded to the sender of a shoutout
const SENDER_POINTS: u32 = 5;

/// Points awarded to each recipient of a shoutout
const RECIPIENT_POINTS: u32 = 2;

/// Leaderboard length
const LEADERBOARD_SIZE: usize = 5;

/// Histogram bucket for senders without a department label
const FALLBACK_DEPARTMENT: &str = "General";

/// A leaderboard row: points keyed by user id, name carried for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: Snowflake,
    pub name: String,
    pub points: u32,
}

/// A department histogram bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

/// In-memory store for users and shoutouts
#[derive(Debug, Default)]
pub struct FeedStore {
    users: Vec<User>,
    user_index: HashMap<Snowflake, usize>,
    /// Newest first
    shoutouts: Vec<Shoutout>,
}

impl FeedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a user directory
    pub fn with_users(users: Vec<User>) -> Self {
        let mut store = Self::new();
        for user in users {
            // Seed directories are built in-process; duplicate ids there
            // are a programming error and safe to drop.
            let _ = store.add_user(user);
        }
        store
    }

    // =========================================================================
    // User directory
    // =========================================================================

    /// Append a user to the directory
    ///
    /// Existing users are never modified; registration is the only caller
    /// besides seeding.
    pub fn add_user(&mut self, user: User) -> Result<(), DomainError> {
        if self.user_index.contains_key(&user.id) {
            return Err(DomainError::UserAlreadyExists(user.id));
        }
        self.user_index.insert(user.id, self.users.len());
        self.users.push(user);
        Ok(())
    }

    /// Look up a user by id
    pub fn user(&self, id: Snowflake) -> Option<&User> {
        self.user_index.get(&id).map(|&i| &self.users[i])
    }

    /// The full user directory, in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Unique department labels, in first-seen order (empty labels skipped)
    pub fn departments(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.users
            .iter()
            .filter(|u| u.has_department())
            .filter(|u| seen.insert(u.department.as_str()))
            .map(|u| u.department.clone())
            .collect()
    }

    // =========================================================================
    // Shoutout mutations
    // =========================================================================

    /// Create a shoutout and insert it at the head of the feed
    ///
    /// The message must be non-empty after trimming and the sender must be
    /// in the directory. Unknown recipient ids are silently dropped;
    /// duplicates are collapsed, keeping the caller's order.
    pub fn create_shoutout(
        &mut self,
        id: Snowflake,
        sender_id: Snowflake,
        recipient_ids: &[Snowflake],
        message: &str,
    ) -> Result<&Shoutout, DomainError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DomainError::EmptyMessage);
        }

        let sender = self
            .user(sender_id)
            .cloned()
            .ok_or(DomainError::UserNotFound(sender_id))?;

        let mut seen = HashSet::new();
        let mut recipients = Vec::new();
        for recipient_id in recipient_ids {
            if !seen.insert(*recipient_id) {
                continue;
            }
            if let Some(user) = self.user(*recipient_id) {
                recipients.push(user.clone());
            }
        }

        self.shoutouts
            .insert(0, Shoutout::new(id, sender, recipients, message.to_string()));
        Ok(&self.shoutouts[0])
    }

    /// Toggle a reaction for a user: off if set, on if not
    ///
    /// Exactly one transition per call. Returns whether the reaction is
    /// set after the toggle.
    pub fn toggle_reaction(
        &mut self,
        shoutout_id: Snowflake,
        reactor_id: Snowflake,
        kind: ReactionKind,
    ) -> Result<bool, DomainError> {
        let shoutout = self
            .shoutout_mut(shoutout_id)
            .ok_or(DomainError::ShoutoutNotFound(shoutout_id))?;

        let removed = {
            let kinds = shoutout.reacted_by.entry(reactor_id).or_default();
            if kinds.contains(&kind) {
                kinds.remove(&kind);
                true
            } else {
                kinds.insert(kind);
                false
            }
        };

        if removed {
            shoutout.reactions.decrement(kind);
        } else {
            shoutout.reactions.increment(kind);
        }

        // Drop empty membership sets so the map mirrors actual reactors
        if shoutout
            .reacted_by
            .get(&reactor_id)
            .is_some_and(HashSet::is_empty)
        {
            shoutout.reacted_by.remove(&reactor_id);
        }

        Ok(!removed)
    }

    /// Append a comment to a shoutout
    ///
    /// The author's display name is resolved from the directory; the text
    /// must be non-empty after trimming.
    pub fn add_comment(
        &mut self,
        shoutout_id: Snowflake,
        comment_id: Snowflake,
        author_id: Snowflake,
        text: &str,
    ) -> Result<Comment, DomainError> {
        if self.shoutout(shoutout_id).is_none() {
            return Err(DomainError::ShoutoutNotFound(shoutout_id));
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyComment);
        }

        let author = self
            .user(author_id)
            .cloned()
            .ok_or(DomainError::UserNotFound(author_id))?;

        let comment = Comment::new(comment_id, author.id, author.name, text);
        let shoutout = self
            .shoutout_mut(shoutout_id)
            .ok_or(DomainError::ShoutoutNotFound(shoutout_id))?;
        shoutout.comments.push(comment.clone());
        Ok(comment)
    }

    /// Remove a shoutout permanently (no tombstone)
    pub fn delete_shoutout(&mut self, shoutout_id: Snowflake) -> Result<Shoutout, DomainError> {
        let position = self
            .shoutouts
            .iter()
            .position(|s| s.id == shoutout_id)
            .ok_or(DomainError::ShoutoutNotFound(shoutout_id))?;
        Ok(self.shoutouts.remove(position))
    }

    /// Mark a shoutout as flagged (idempotent, never unset)
    pub fn flag_shoutout(&mut self, shoutout_id: Snowflake) -> Result<(), DomainError> {
        let shoutout = self
            .shoutout_mut(shoutout_id)
            .ok_or(DomainError::ShoutoutNotFound(shoutout_id))?;
        shoutout.flagged = true;
        Ok(())
    }

    /// Insert a fully formed shoutout at the head of the feed
    ///
    /// Seeding hook: demo data carries backdated timestamps that
    /// `create_shoutout` would not produce.
    pub fn insert_shoutout(&mut self, shoutout: Shoutout) {
        self.shoutouts.insert(0, shoutout);
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// The matching shoutouts, newest first
    ///
    /// The sequence is re-derived on every call; ties on the timestamp
    /// keep feed order (stable sort).
    pub fn filter_shoutouts<'a>(
        &'a self,
        filter: &FeedFilter,
    ) -> impl Iterator<Item = &'a Shoutout> + 'a {
        let mut matching: Vec<&Shoutout> = self
            .shoutouts
            .iter()
            .filter(|s| filter.matches(s))
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.into_iter()
    }

    /// Top contributors: +5 per shoutout sent, +2 per shoutout received
    ///
    /// Keyed by user id (two users sharing a display name score
    /// separately), ties broken by first appearance in the feed, truncated
    /// to the top five.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = Vec::new();
        let mut index: HashMap<Snowflake, usize> = HashMap::new();

        let mut award = |entries: &mut Vec<LeaderboardEntry>, user: &User, points: u32| {
            let i = *index.entry(user.id).or_insert_with(|| {
                entries.push(LeaderboardEntry {
                    user_id: user.id,
                    name: user.name.clone(),
                    points: 0,
                });
                entries.len() - 1
            });
            entries[i].points += points;
        };

        for shoutout in &self.shoutouts {
            award(&mut entries, &shoutout.sender, SENDER_POINTS);
            for recipient in &shoutout.recipients {
                award(&mut entries, recipient, RECIPIENT_POINTS);
            }
        }

        entries.sort_by(|a, b| b.points.cmp(&a.points));
        entries.truncate(LEADERBOARD_SIZE);
        entries
    }

    /// Shoutout counts per sender department, in first-occurrence order
    ///
    /// Senders without a department fall into the `"General"` bucket.
    /// Recipients are not counted.
    pub fn department_histogram(&self) -> Vec<DepartmentCount> {
        let mut buckets: Vec<DepartmentCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for shoutout in &self.shoutouts {
            let department = if shoutout.sender.has_department() {
                shoutout.sender.department.as_str()
            } else {
                FALLBACK_DEPARTMENT
            };

            let i = *index.entry(department.to_string()).or_insert_with(|| {
                buckets.push(DepartmentCount {
                    department: department.to_string(),
                    count: 0,
                });
                buckets.len() - 1
            });
            buckets[i].count += 1;
        }

        buckets
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Look up a shoutout by id
    pub fn shoutout(&self, id: Snowflake) -> Option<&Shoutout> {
        self.shoutouts.iter().find(|s| s.id == id)
    }

    fn shoutout_mut(&mut self, id: Snowflake) -> Option<&mut Shoutout> {
        self.shoutouts.iter_mut().find(|s| s.id == id)
    }

    /// The full feed, newest first
    pub fn shoutouts(&self) -> &[Shoutout] {
        &self.shoutouts
    }

    /// Number of shoutouts in the feed
    pub fn len(&self) -> usize {
        self.shoutouts.len()
    }

    /// Whether the feed is empty
    pub fn is_empty(&self) -> bool {
        self.shoutouts.is_empty()
    }
}
