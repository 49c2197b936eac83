//! Generation options
//!
//! Options select how names are normalized and how many groups are formed.
//! Exactly one of `group_count` / `group_size` is active, chosen by `mode`.
//!
//! Wire names for the mode (`"jumlah"` / `"ukuran"`) match the web form
//! values, so existing share links and config files load unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which parameter is fixed when forming groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupingMode {
    /// Fixed number of groups
    #[default]
    #[serde(rename = "jumlah")]
    Count,

    /// Fixed target group size; group count is derived
    #[serde(rename = "ukuran")]
    Size,
}

impl GroupingMode {
    /// Name used in share links and config files
    pub fn wire_name(self) -> &'static str {
        match self {
            GroupingMode::Count => "jumlah",
            GroupingMode::Size => "ukuran",
        }
    }

    /// Parse a wire name, `None` for anything unrecognized
    pub fn from_wire_name(value: &str) -> Option<Self> {
        match value {
            "jumlah" => Some(GroupingMode::Count),
            "ukuran" => Some(GroupingMode::Size),
            _ => None,
        }
    }
}

/// Errors raised when input or options cannot produce a valid grouping
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupingError {
    #[error("No names left after normalization")]
    EmptyInput,

    #[error("Group count {count} must be between 1 and the number of names ({names})")]
    InvalidGroupCount { count: usize, names: usize },

    #[error("Group size {size} must be at least 1")]
    InvalidGroupSize { size: usize },

    #[error("Nothing to reshuffle: no groups have been generated yet")]
    NothingToReshuffle,
}

/// Options for one generation
///
/// # Example
/// ```
/// use group_maker_core::{GroupOptions, GroupingMode};
///
/// let options = GroupOptions::by_count(3).with_seed("kelas-7a");
/// assert_eq!(options.mode, GroupingMode::Count);
/// assert_eq!(options.group_count_for(10), Ok(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupOptions {
    pub mode: GroupingMode,

    /// Number of groups (count mode)
    pub group_count: usize,

    /// Target members per group (size mode)
    pub group_size: usize,

    /// Keep only the first occurrence of each name
    pub remove_duplicates: bool,

    /// Trim whitespace and drop blank lines
    pub trim_empty: bool,

    /// Seed for reproducible shuffles; empty means unseeded
    pub seed: Option<String>,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            mode: GroupingMode::Count,
            group_count: 2,
            group_size: 2,
            remove_duplicates: false,
            trim_empty: false,
            seed: None,
        }
    }
}

impl GroupOptions {
    /// Count mode with `count` groups
    pub fn by_count(count: usize) -> Self {
        Self {
            mode: GroupingMode::Count,
            group_count: count,
            ..Self::default()
        }
    }

    /// Size mode with groups of about `size` members
    pub fn by_size(size: usize) -> Self {
        Self {
            mode: GroupingMode::Size,
            group_size: size,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_remove_duplicates(mut self, remove_duplicates: bool) -> Self {
        self.remove_duplicates = remove_duplicates;
        self
    }

    pub fn with_trim_empty(mut self, trim_empty: bool) -> Self {
        self.trim_empty = trim_empty;
        self
    }

    /// The seed if one is set and non-empty
    pub fn effective_seed(&self) -> Option<&str> {
        self.seed.as_deref().filter(|seed| !seed.is_empty())
    }

    /// Number of groups these options produce for `name_count` names
    ///
    /// # Errors
    /// - `EmptyInput` if `name_count` is zero
    /// - `InvalidGroupCount` in count mode when the count is 0 or exceeds `name_count`
    /// - `InvalidGroupSize` in size mode when the size is 0
    pub fn group_count_for(&self, name_count: usize) -> Result<usize, GroupingError> {
        if name_count == 0 {
            return Err(GroupingError::EmptyInput);
        }

        match self.mode {
            GroupingMode::Count => {
                if self.group_count < 1 || self.group_count > name_count {
                    return Err(GroupingError::InvalidGroupCount {
                        count: self.group_count,
                        names: name_count,
                    });
                }
                Ok(self.group_count)
            }
            GroupingMode::Size => {
                if self.group_size < 1 {
                    return Err(GroupingError::InvalidGroupSize {
                        size: self.group_size,
                    });
                }
                Ok(name_count.div_ceil(self.group_size))
            }
        }
    }

    /// Validate against `name_count` without computing anything else
    pub fn validate(&self, name_count: usize) -> Result<(), GroupingError> {
        self.group_count_for(name_count).map(|_| ())
    }
}
