use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of items the application starts with
pub const DEFAULT_SEED_COUNT: usize = 100;

/// Prefix of generated seed texts ("To Do 1", "To Do 2", ...)
pub const SEED_PREFIX: &str = "To Do";

/// Stable identifier assigned to an item when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One to-do entry. Its position is its index in the owning list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
}

/// How per-row transient state (edit mode, draft) is keyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowIdentity {
    /// Row state follows the item through deletions
    #[default]
    Stable,
    /// Row state stays at its position; the item that moves into a position
    /// inherits whatever was held there
    Positional,
}

/// Seed text for the item at `position` (zero based)
pub fn seed_text(position: usize) -> String {
    format!("{} {}", SEED_PREFIX, position + 1)
}
