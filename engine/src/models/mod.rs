//! Domain types
//!
//! - **group**: Names, groups and one generation's group set
//! - **options**: Generation options, validation and errors

pub mod group;
pub mod options;

pub use group::{Group, GroupSet, Name};
pub use options::{GroupOptions, GroupingError, GroupingMode};
