//! PyO3 wrapper for GroupMaker
//!
//! # Example (from Python)
//!
//! ```python
//! from group_maker_core import GroupMaker
//!
//! maker = GroupMaker()
//! groups = maker.generate("Ann\nBob\nCam\nDee\nEve", group_count=2, seed="x")
//! print(groups)          # [['Eve', 'Cam', 'Bob'], ['Dee', 'Ann']]
//! maker.reshuffle()
//! maker.undo()
//! print(maker.to_csv())
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::export::{to_csv, to_json, to_plain_text};
use crate::models::{Group, GroupOptions, GroupSet, GroupingMode};
use crate::rng::hash_seed;
use crate::session::GroupMaker as RustGroupMaker;

fn groups_to_py(groups: &GroupSet) -> Vec<Group> {
    groups.groups().to_vec()
}

fn current_or_err(maker: &RustGroupMaker) -> PyResult<&GroupSet> {
    maker
        .current()
        .ok_or_else(|| PyRuntimeError::new_err("No groups have been generated yet"))
}

/// Python wrapper for the Rust GroupMaker session
#[pyclass(name = "GroupMaker")]
pub struct PyGroupMaker {
    inner: RustGroupMaker,
}

#[pymethods]
impl PyGroupMaker {
    #[new]
    fn new() -> Self {
        PyGroupMaker {
            inner: RustGroupMaker::new(),
        }
    }

    /// Generate groups and push them onto history
    ///
    /// Raises ValueError for an unknown mode or invalid input/options.
    #[pyo3(signature = (
        text,
        mode = "jumlah",
        group_count = 2,
        group_size = 2,
        remove_duplicates = false,
        trim_empty = false,
        seed = None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn generate(
        &mut self,
        text: &str,
        mode: &str,
        group_count: usize,
        group_size: usize,
        remove_duplicates: bool,
        trim_empty: bool,
        seed: Option<String>,
    ) -> PyResult<Vec<Group>> {
        let mode = GroupingMode::from_wire_name(mode)
            .ok_or_else(|| PyValueError::new_err(format!("Unknown mode '{}'", mode)))?;

        let options = GroupOptions {
            mode,
            group_count,
            group_size,
            remove_duplicates,
            trim_empty,
            seed,
        };

        self.inner
            .generate(text, &options)
            .map(groups_to_py)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Generate again from the last input
    fn reshuffle(&mut self) -> PyResult<Vec<Group>> {
        self.inner
            .reshuffle()
            .map(groups_to_py)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Previous result, or None when there is nothing to undo
    fn undo(&mut self) -> Option<Vec<Group>> {
        self.inner.undo().map(groups_to_py)
    }

    /// Next result, or None when there is nothing to redo
    fn redo(&mut self) -> Option<Vec<Group>> {
        self.inner.redo().map(groups_to_py)
    }

    fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    fn current(&self) -> Option<Vec<Group>> {
        self.inner.current().map(groups_to_py)
    }

    fn to_text(&self) -> PyResult<String> {
        current_or_err(&self.inner).map(to_plain_text)
    }

    fn to_csv(&self) -> PyResult<String> {
        current_or_err(&self.inner).map(to_csv)
    }

    fn to_json(&self) -> PyResult<String> {
        let groups = current_or_err(&self.inner)?;
        to_json(groups).map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }
}

/// Seed string to LCG state, exposed for cross-checking shared seeds
#[pyfunction]
#[pyo3(name = "hash_seed")]
pub fn py_hash_seed(seed: &str) -> u32 {
    hash_seed(seed)
}
