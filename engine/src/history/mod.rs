//! Undo/redo history of generated group sets
//!
//! History is linear. `push` after an `undo` discards every entry past the
//! cursor, so an undone future can never be redone once a new result exists.
//!
//! # Invariants
//!
//! - `cursor` is `None` iff `entries` is empty
//! - otherwise `cursor < entries.len()`

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::GroupSet;

/// One recorded generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry identifier (UUID)
    id: String,

    /// 1-based generation number, increasing across the life of the store
    ///
    /// Not reused after branch discard, so renderers can tell a fresh
    /// result from one reached by undo/redo.
    generation: u64,

    /// The recorded result
    groups: GroupSet,
}

impl HistoryEntry {
    fn new(generation: u64, groups: GroupSet) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            generation,
            groups,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn groups(&self) -> &GroupSet {
        &self.groups
    }
}

/// Linear, branch-discarding undo/redo stack
///
/// # Example
/// ```
/// use group_maker_core::{GroupSet, HistoryStore};
///
/// let mut history = HistoryStore::new();
/// history.push(GroupSet::new(vec![vec!["A".to_string()]]));
/// history.push(GroupSet::new(vec![vec!["B".to_string()]]));
///
/// assert!(history.can_undo());
/// history.undo();
/// assert!(history.can_redo());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    generations: u64,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `groups` as the new current entry
    ///
    /// Entries after the cursor are dropped first.
    pub fn push(&mut self, groups: GroupSet) -> &HistoryEntry {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.entries.truncate(keep);

        self.generations += 1;
        self.entries.push(HistoryEntry::new(self.generations, groups));

        let last = self.entries.len() - 1;
        self.cursor = Some(last);
        &self.entries[last]
    }

    /// Step back one entry
    ///
    /// Returns the entry that is now current, or `None` when there is
    /// nothing to undo (the cursor does not move).
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        let cursor = self.cursor.filter(|&cursor| cursor > 0)?;
        self.cursor = Some(cursor - 1);
        self.current()
    }

    /// Step forward one entry
    ///
    /// Returns the entry that is now current, or `None` when already at the
    /// newest entry.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        let cursor = self.cursor.filter(|&cursor| cursor + 1 < self.entries.len())?;
        self.cursor = Some(cursor + 1);
        self.current()
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }

    /// Entry under the cursor
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All retained entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
