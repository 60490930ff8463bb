//! In-memory implementation of [`MatrixStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests, ephemeral sessions,
//! and anywhere persistence isn't needed. All data lives in a HashMap.

use std::collections::HashMap;

use bandmat_core::PackedMatrix;

use crate::error::StoreError;
use crate::traits::MatrixStore;
use crate::types::{SessionId, SessionSummary};

/// In-memory implementation of [`MatrixStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sessions: HashMap<SessionId, PackedMatrix>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryStore {
            sessions: HashMap::new(),
        }
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl MatrixStore for InMemoryStore {
    fn insert(&mut self, packed: PackedMatrix) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, packed);
        id
    }

    fn get(&self, id: SessionId) -> Result<&PackedMatrix, StoreError> {
        self.sessions
            .get(&id)
            .ok_or(StoreError::SessionNotFound(id))
    }

    fn get_mut(&mut self, id: SessionId) -> Result<&mut PackedMatrix, StoreError> {
        self.sessions
            .get_mut(&id)
            .ok_or(StoreError::SessionNotFound(id))
    }

    fn remove(&mut self, id: SessionId) -> Result<PackedMatrix, StoreError> {
        self.sessions
            .remove(&id)
            .ok_or(StoreError::SessionNotFound(id))
    }

    fn list(&self) -> Vec<SessionSummary> {
        let mut summaries: Vec<SessionSummary> = self
            .sessions
            .iter()
            .map(|(&id, packed)| SessionSummary {
                id,
                dimension: packed.total_size(),
                stored_values: packed.values().len(),
            })
            .collect();
        summaries.sort_by_key(|s| s.id.0);
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandmat_core::{pack, BandProfile, DenseMatrix};

    fn packed_path_graph() -> PackedMatrix {
        let mut m = DenseMatrix::zeros(4);
        m.set(0, 1, 1.0);
        m.set(1, 2, 1.0);
        m.set(2, 3, 1.0);
        pack(&m, BandProfile::variable_of(&m))
    }

    #[test]
    fn insert_then_get_returns_the_same_matrix() {
        let mut store = InMemoryStore::new();
        let packed = packed_path_graph();
        let id = store.insert(packed.clone());

        assert_eq!(store.get(id).unwrap(), &packed);
    }

    #[test]
    fn unknown_session_is_not_found() {
        let store = InMemoryStore::new();
        let id = SessionId::new();
        assert!(matches!(
            store.get(id),
            Err(StoreError::SessionNotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut store = InMemoryStore::new();
        let id = store.insert(packed_path_graph());

        store.get_mut(id).unwrap().update(1, 0, 7.0).unwrap();
        assert_eq!(store.get(id).unwrap().get(1, 0).unwrap(), 7.0);
    }

    #[test]
    fn remove_frees_the_session() {
        let mut store = InMemoryStore::new();
        let id = store.insert(packed_path_graph());

        store.remove(id).unwrap();
        assert!(store.is_empty());
        assert!(store.get(id).is_err());
    }

    #[test]
    fn list_reports_every_session() {
        let mut store = InMemoryStore::new();
        let a = store.insert(packed_path_graph());
        let b = store.insert(packed_path_graph());

        let summaries = store.list();
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().any(|s| s.id == a));
        assert!(summaries.iter().any(|s| s.id == b));
        assert!(summaries.iter().all(|s| s.dimension == 4));
        assert!(summaries.iter().all(|s| s.stored_values == 7));
    }
}
