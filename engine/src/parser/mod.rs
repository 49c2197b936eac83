//! Name parsing
//!
//! Turns the raw multi-line input into an ordered name list. Lines are split
//! on `\n` only; a trailing `\r` stays part of the name unless trimming is on.
//! Trimming always runs before deduplication.

use std::collections::HashSet;

use crate::models::Name;

/// Parse raw text into names
///
/// # Arguments
/// * `text` - Raw input, one name per line
/// * `remove_duplicates` - Keep only the first occurrence of each name
/// * `trim_empty` - Trim each line and drop lines that end up empty
///
/// # Example
/// ```
/// use group_maker_core::parse_names;
///
/// assert_eq!(parse_names("A\n\nB\n", false, true), vec!["A", "B"]);
/// assert_eq!(parse_names("A\n\nB\n", false, false), vec!["A", "", "B", ""]);
/// ```
pub fn parse_names(text: &str, remove_duplicates: bool, trim_empty: bool) -> Vec<Name> {
    let lines = text.split('\n');

    let names: Vec<Name> = if trim_empty {
        lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        lines.map(str::to_string).collect()
    };

    if remove_duplicates {
        dedup_preserving_order(names)
    } else {
        names
    }
}

fn dedup_preserving_order(names: Vec<Name>) -> Vec<Name> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
