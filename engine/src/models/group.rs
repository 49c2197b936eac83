//! Group model
//!
//! A `GroupSet` is the result of one generation: an ordered list of groups,
//! each an ordered list of names. It is never mutated after construction;
//! a reshuffle produces a new set.

use serde::{Deserialize, Serialize};

/// A single participant name. Identity is exact text equality.
pub type Name = String;

/// Ordered members of one group
pub type Group = Vec<Name>;

/// One generation result
///
/// Serializes as a plain JSON array of arrays of strings.
///
/// # Example
/// ```
/// use group_maker_core::GroupSet;
///
/// let set = GroupSet::new(vec![
///     vec!["Ann".to_string(), "Cam".to_string()],
///     vec!["Bob".to_string()],
/// ]);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.member_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSet {
    groups: Vec<Group>,
}

impl GroupSet {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// All groups in index order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Group at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of names across all groups
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Size of the smallest and largest group, `None` when there are no groups
    pub fn size_range(&self) -> Option<(usize, usize)> {
        let min = self.groups.iter().map(Vec::len).min()?;
        let max = self.groups.iter().map(Vec::len).max()?;
        Some((min, max))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }
}
