//! Balanced group distribution
//!
//! Names are dealt round-robin: the name at index `k` goes to group
//! `k mod num_groups`. This keeps every pair of groups within one member of
//! each other in both modes. In size mode the group count is
//! `ceil(names / group_size)`, so groups are balanced rather than filled to
//! exactly `group_size` with a short last group.

use crate::models::{Group, GroupOptions, GroupSet, GroupingError, Name};

/// Partition `names` into balanced groups
///
/// # Errors
/// Returns the validation error from [`GroupOptions::group_count_for`] when
/// `names` is empty or the count/size is out of range.
///
/// # Example
/// ```
/// use group_maker_core::{distribute_balanced, GroupOptions};
///
/// let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let set = distribute_balanced(&names, &GroupOptions::by_size(2)).unwrap();
/// assert_eq!(set.groups(), &[vec!["A", "C"], vec!["B"]]);
/// ```
pub fn distribute_balanced(
    names: &[Name],
    options: &GroupOptions,
) -> Result<GroupSet, GroupingError> {
    let num_groups = options.group_count_for(names.len())?;
    Ok(GroupSet::new(round_robin(names, num_groups)))
}

/// Deal `names` across `num_groups` buckets; `num_groups` must be non-zero
fn round_robin(names: &[Name], num_groups: usize) -> Vec<Group> {
    let base_capacity = names.len().div_ceil(num_groups);
    let mut groups: Vec<Group> = (0..num_groups)
        .map(|_| Vec::with_capacity(base_capacity))
        .collect();

    for (index, name) in names.iter().enumerate() {
        groups[index % num_groups].push(name.clone());
    }

    groups
}
