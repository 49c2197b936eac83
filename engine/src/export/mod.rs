//! Export formatting
//!
//! Renders a [`GroupSet`] for copy, download and print. Group labels are
//! 1-based (`Kelompok 1`, `Kelompok 2`, ...).

use std::fmt::Write as _;

use crate::models::GroupSet;

const GROUP_LABEL: &str = "Kelompok";
const CSV_HEADER: &str = "Kelompok,Anggota";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    /// Default download file name
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Text => "kelompok.txt",
            ExportFormat::Csv => "kelompok.csv",
            ExportFormat::Json => "kelompok.json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Render `groups` in this format
    ///
    /// # Errors
    /// Only JSON rendering can fail.
    pub fn render(self, groups: &GroupSet) -> Result<String, serde_json::Error> {
        match self {
            ExportFormat::Text => Ok(to_plain_text(groups)),
            ExportFormat::Csv => Ok(to_csv(groups)),
            ExportFormat::Json => to_json(groups),
        }
    }
}

/// Plain text listing, one block per group followed by a blank line
///
/// # Example
/// ```
/// use group_maker_core::{to_plain_text, GroupSet};
///
/// let set = GroupSet::new(vec![vec!["Ann".to_string()]]);
/// assert_eq!(to_plain_text(&set), "Kelompok 1:\n- Ann\n\n");
/// ```
pub fn to_plain_text(groups: &GroupSet) -> String {
    let mut text = String::new();
    for (index, group) in groups.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(text, "{} {}:", GROUP_LABEL, index + 1);
        for member in group {
            let _ = writeln!(text, "- {}", member);
        }
        text.push('\n');
    }
    text
}

/// CSV with one `"Kelompok N","member"` row per member
///
/// Embedded double quotes are doubled.
pub fn to_csv(groups: &GroupSet) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for (index, group) in groups.iter().enumerate() {
        for member in group {
            let _ = writeln!(
                csv,
                "\"{} {}\",\"{}\"",
                GROUP_LABEL,
                index + 1,
                member.replace('"', "\"\"")
            );
        }
    }
    csv
}

/// Pretty-printed JSON array of arrays, two-space indent
pub fn to_json(groups: &GroupSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(groups)
}
