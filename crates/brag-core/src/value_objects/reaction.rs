//! Reaction kinds and per-shoutout reaction tallies
//!
//! Reaction kinds are a closed enumeration rather than free-form strings,
//! so a shoutout can never accumulate garbage reaction keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A sentiment tag a viewer can toggle on a shoutout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Clap,
    Star,
}

impl ReactionKind {
    /// All reaction kinds, in display order
    pub const ALL: [ReactionKind; 3] = [Self::Like, Self::Clap, Self::Star];

    /// Wire name of this kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Clap => "clap",
            Self::Star => "star",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "clap" => Ok(Self::Clap),
            "star" => Ok(Self::Star),
            other => Err(DomainError::UnknownReactionKind(other.to_string())),
        }
    }
}

/// Per-kind reaction counts on a single shoutout
///
/// Counts are kept in lockstep with the per-user membership sets on the
/// shoutout; they never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like: u32,
    pub clap: u32,
    pub star: u32,
}

impl ReactionCounts {
    /// Count for a single kind
    #[must_use]
    pub const fn count(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Clap => self.clap,
            ReactionKind::Star => self.star,
        }
    }

    fn slot_mut(&mut self, kind: ReactionKind) -> &mut u32 {
        match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Clap => &mut self.clap,
            ReactionKind::Star => &mut self.star,
        }
    }

    /// Increment the count for a kind
    pub fn increment(&mut self, kind: ReactionKind) {
        *self.slot_mut(kind) += 1;
    }

    /// Decrement the count for a kind, flooring at zero
    pub fn decrement(&mut self, kind: ReactionKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_sub(1);
    }

    /// Total reactions across all kinds
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.like + self.clap + self.star
    }
}
