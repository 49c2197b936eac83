//! Group Maker Core - Rust Engine
//!
//! Splits a list of names into balanced groups with reproducible, seeded
//! shuffling and an undo/redo history of results.
//!
//! # Architecture
//!
//! - **parser**: Raw text to name list (trim, dedup)
//! - **rng**: Seed hashing, seeded LCG, pluggable random sources
//! - **shuffle**: Fisher–Yates permutation
//! - **distribution**: Round-robin partition into groups
//! - **history**: Linear, branch-discarding undo/redo stack
//! - **session**: Generate / reshuffle / undo / redo over the above
//! - **export**: Plain text, CSV and JSON formatting
//! - **share**: Share-link query parameters
//!
//! # Critical Invariants
//!
//! 1. Every normalized name lands in exactly one group
//! 2. Group sizes differ by at most one
//! 3. Same seed + same input + same options => identical groups

// Module declarations
pub mod distribution;
pub mod export;
pub mod history;
pub mod models;
pub mod parser;
pub mod rng;
pub mod session;
pub mod share;
pub mod shuffle;

// Re-exports for convenience
pub use distribution::distribute_balanced;
pub use export::{to_csv, to_json, to_plain_text, ExportFormat};
pub use history::{HistoryEntry, HistoryStore};
pub use models::{
    group::{Group, GroupSet, Name},
    options::{GroupOptions, GroupingError, GroupingMode},
};
pub use parser::parse_names;
pub use rng::{hash_seed, EntropySource, RandomSource, SeededRng};
pub use session::GroupMaker;
pub use share::ShareParams;
pub use shuffle::shuffle;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn group_maker_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::session::PyGroupMaker>()?;
    m.add_function(wrap_pyfunction!(ffi::session::py_hash_seed, m)?)?;
    Ok(())
}
