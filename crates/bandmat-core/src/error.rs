//! Core error types for bandmat-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! all anticipated failure modes in the core matrix engine.

use thiserror::Error;

/// Core errors produced by the bandmat-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An edge weight could not be parsed as a number during ingestion.
    #[error("cannot parse weight '{raw}' on edge {from} -> {to}")]
    ParseError {
        from: String,
        to: String,
        raw: String,
    },

    /// A row or column index is outside the matrix bounds.
    #[error("index out of range: ({row}, {col}) for matrix of size {size}")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },

    /// A packed-matrix invariant was violated.
    ///
    /// The affected matrix instance is inconsistent and must be discarded
    /// or rebuilt; it is never repaired in place.
    #[error("corrupt packed state: {reason}")]
    CorruptState { reason: String },
}
