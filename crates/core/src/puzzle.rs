//! Puzzle definitions - the static configuration a session is built from.
//!
//! A [`PuzzleDef`] is supplied to the engine at construction. The partition
//! invariants (4 groups of 4, globally unique items) are preconditions of
//! every other rule, so they are checked once, up front, and violations are
//! construction errors rather than in-game messages.

use thiserror::Error;

use crate::types::{GroupColor, GROUP_COUNT, GROUP_SIZE};

/// A malformed puzzle definition, rejected at engine construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle must have exactly 4 groups, found {0}")]
    GroupCount(usize),
    #[error("group {name:?} must have exactly 4 items, found {found}")]
    GroupSize { name: String, found: usize },
    #[error("item {0:?} appears in more than one place")]
    DuplicateItem(String),
}

/// One hidden group: a name, a display color, and its four items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDef {
    pub name: String,
    pub color: GroupColor,
    pub items: Vec<String>,
}

impl GroupDef {
    pub fn new<I, S>(name: &str, color: GroupColor, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            color,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// A complete puzzle: title, daily number, and the four groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDef {
    pub number: u32,
    pub title: String,
    pub groups: Vec<GroupDef>,
}

impl PuzzleDef {
    /// Check the partition invariants.
    ///
    /// Item labels are compared exactly (case-sensitive): labels are opaque
    /// to the engine.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.groups.len() != GROUP_COUNT {
            return Err(PuzzleError::GroupCount(self.groups.len()));
        }

        for group in &self.groups {
            if group.items.len() != GROUP_SIZE {
                return Err(PuzzleError::GroupSize {
                    name: group.name.clone(),
                    found: group.items.len(),
                });
            }
        }

        let mut seen: Vec<&str> = Vec::with_capacity(GROUP_COUNT * GROUP_SIZE);
        for group in &self.groups {
            for item in &group.items {
                if seen.contains(&item.as_str()) {
                    return Err(PuzzleError::DuplicateItem(item.clone()));
                }
                seen.push(item);
            }
        }

        Ok(())
    }
}
