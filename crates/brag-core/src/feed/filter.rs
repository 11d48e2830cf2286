//! Feed filter predicates
//!
//! Normalization happens at construction: the search text is trimmed and
//! case-folded once, the department string is checked against the "all"
//! sentinel. Matching is then a cheap predicate per shoutout.

use crate::entities::Shoutout;

/// Sentinel department value that matches every shoutout
const ALL_DEPARTMENTS: &str = "all";

/// Department restriction for the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentFilter {
    /// No restriction
    All,
    /// Sender or any recipient must be in this department
    Named(String),
}

impl DepartmentFilter {
    /// Parse a raw department value; `"all"` means no restriction
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_DEPARTMENTS {
            Self::All
        } else {
            Self::Named(raw.to_string())
        }
    }

    fn matches(&self, shoutout: &Shoutout) -> bool {
        match self {
            Self::All => true,
            Self::Named(department) => {
                shoutout.sender.department == *department
                    || shoutout
                        .recipients
                        .iter()
                        .any(|r| r.department == *department)
            }
        }
    }
}

/// Combined department + search filter; both predicates must pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedFilter {
    department: DepartmentFilter,
    /// Trimmed and lowercased; empty means unrestricted
    search: String,
}

impl FeedFilter {
    /// Build a filter from raw department and search inputs
    pub fn new(department: &str, search: &str) -> Self {
        Self {
            department: DepartmentFilter::parse(department),
            search: search.trim().to_lowercase(),
        }
    }

    /// A filter that passes every shoutout
    pub fn all() -> Self {
        Self::new(ALL_DEPARTMENTS, "")
    }

    /// Whether a shoutout passes both predicates
    pub fn matches(&self, shoutout: &Shoutout) -> bool {
        self.department.matches(shoutout) && self.search_matches(shoutout)
    }

    fn search_matches(&self, shoutout: &Shoutout) -> bool {
        if self.search.is_empty() {
            return true;
        }
        if shoutout.message.to_lowercase().contains(&self.search) {
            return true;
        }
        if shoutout.sender.name.to_lowercase().contains(&self.search) {
            return true;
        }
        shoutout
            .recipients
            .iter()
            .any(|r| r.name.to_lowercase().contains(&self.search))
    }
}

impl Default for FeedFilter {
    fn default() -> Self {
        Self::all()
    }
}
