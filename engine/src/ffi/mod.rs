//! Python bindings (feature `pyo3`)
//!
//! Thin wrappers only; all behavior lives in the Rust session.

pub mod session;
