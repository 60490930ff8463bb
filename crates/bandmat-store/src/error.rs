//! Store error types for bandmat-store.
//!
//! [`StoreError`] covers the anticipated failure modes of the store layer:
//! missing sessions, engine failures surfacing from bandmat-core, and JSON
//! serialization.

use thiserror::Error;

use bandmat_core::CoreError;

use crate::types::SessionId;

/// Errors produced by store and service operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No session with the given ID exists in the store.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// The engine rejected an operation on the session's matrix.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
