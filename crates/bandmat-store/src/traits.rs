//! The [`MatrixStore`] trait defining the storage contract for packed
//! matrices.
//!
//! The contract is associative lookup: a packed matrix goes in, a
//! [`SessionId`] comes out, and every later operation resolves that key or
//! fails with [`StoreError::SessionNotFound`]. There is no expiry and no
//! eviction; a session lives until it is removed.
//!
//! All backends implement this trait, ensuring they are swappable without
//! changing service logic. The trait is synchronous (not async) for
//! simplicity in the current single-threaded design.

use bandmat_core::PackedMatrix;

use crate::error::StoreError;
use crate::types::{SessionId, SessionSummary};

/// The storage contract for packed matrices.
pub trait MatrixStore {
    /// Stores a packed matrix under a freshly allocated [`SessionId`].
    fn insert(&mut self, packed: PackedMatrix) -> SessionId;

    /// Resolves a session to its stored matrix.
    fn get(&self, id: SessionId) -> Result<&PackedMatrix, StoreError>;

    /// Resolves a session for in-place mutation.
    fn get_mut(&mut self, id: SessionId) -> Result<&mut PackedMatrix, StoreError>;

    /// Removes a session, returning the stored matrix.
    fn remove(&mut self, id: SessionId) -> Result<PackedMatrix, StoreError>;

    /// Lists all stored sessions.
    fn list(&self) -> Vec<SessionSummary>;
}
