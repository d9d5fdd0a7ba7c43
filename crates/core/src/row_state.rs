//! Row-state tags for sale detail change-sets.
//!
//! A sale update submits the full detail list with a per-row tag naming
//! the caller's intent for that row. The store applies the tagged writes;
//! the tag itself is transient and is never persisted, so re-fetched rows
//! always come back `Unchanged`.

use serde::{Deserialize, Serialize};

/// Caller intent for one detail row in a sale change-set.
///
/// - `Added`     -- insert this row into the sale.
/// - `Modified`  -- overwrite the stored row for the same product.
/// - `Deleted`   -- remove the stored row for the same product.
/// - `Unchanged` -- leave the stored row alone (the default).
///
/// Unknown tags are rejected at deserialization; the tag set is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowState {
    Added,
    Modified,
    Deleted,
    #[default]
    Unchanged,
}

impl RowState {
    /// String representation for display, logging, and the store payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
            Self::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for RowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
