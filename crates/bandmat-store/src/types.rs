//! Store-layer types for session identity and metadata.
//!
//! [`SessionId`] is defined here (not in bandmat-core) because session
//! identity is a storage concern -- a packed matrix only gains an ID when it
//! enters a store.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored packed matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Allocates a fresh random identifier.
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of a stored session (for listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session identifier.
    pub id: SessionId,
    /// Matrix dimension `n`.
    pub dimension: usize,
    /// Number of values held in packed form.
    pub stored_values: usize,
}

/// One weighted edge as it arrives from the outside world.
///
/// The weight stays textual until ingestion parses it; a malformed weight is
/// reported against the edge it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInput {
    /// Label of one endpoint.
    pub from: String,
    /// Label of the other endpoint.
    pub to: String,
    /// Raw weight text.
    pub weight: String,
}

impl EdgeInput {
    /// Convenience constructor from string-ish parts.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        EdgeInput {
            from: from.into(),
            to: to.into(),
            weight: weight.into(),
        }
    }
}
