//! PackingService: the single coordinator between callers and the
//! engine/store layers.
//!
//! All business logic flows through [`PackingService`]: ingestion builds the
//! graph, profiles it, packs it, and stores the result; updates resolve a
//! session and mutate the packed form in place; reads hand back the packed
//! snapshot or the decompressed dense matrix.

use bandmat_core::{pack, BandPolicy, DenseMatrix, EdgeListGraph, PackedMatrix};

use crate::error::StoreError;
use crate::traits::MatrixStore;
use crate::types::{EdgeInput, SessionId, SessionSummary};

/// The central service coordinating ingestion, in-place updates, and
/// retrieval over a [`MatrixStore`] backend.
pub struct PackingService<S: MatrixStore> {
    store: S,
    policy: BandPolicy,
}

impl<S: MatrixStore> PackingService<S> {
    /// Creates a service over `store` using the tight per-row profile.
    pub fn new(store: S) -> Self {
        PackingService {
            store,
            policy: BandPolicy::Variable,
        }
    }

    /// Creates a service over `store` with an explicit profiling policy.
    pub fn with_policy(store: S, policy: BandPolicy) -> Self {
        PackingService { store, policy }
    }

    /// Builds, profiles, packs, and stores a matrix from edge-list input.
    ///
    /// `labels` seeds the node ordering; labels appearing only as edge
    /// endpoints join the node set in first-seen order after the declared
    /// ones.
    pub fn ingest(
        &mut self,
        labels: &[String],
        edges: &[EdgeInput],
    ) -> Result<SessionId, StoreError> {
        let mut graph = EdgeListGraph::new();
        for label in labels {
            graph.declare_node(label);
        }
        for edge in edges {
            graph.add_weighted_edge(&edge.from, &edge.to, &edge.weight)?;
        }

        let dense = graph.to_dense();
        let profile = self.policy.profile_of(&dense);
        let packed = pack(&dense, profile);
        let stored_values = packed.values().len();
        let id = self.store.insert(packed);

        tracing::info!(
            "packed session {}: {} nodes, {} edges, {} stored values",
            id,
            graph.node_count(),
            graph.edge_count(),
            stored_values
        );
        Ok(id)
    }

    /// Updates one logical cell of a stored matrix, in packed form.
    pub fn update(
        &mut self,
        id: SessionId,
        row: usize,
        col: usize,
        value: f64,
    ) -> Result<(), StoreError> {
        let packed = self.store.get_mut(id)?;
        packed.update(row, col, value)?;
        tracing::debug!("session {}: set ({}, {}) = {}", id, row, col, value);
        Ok(())
    }

    /// Returns a copy of the stored packed form.
    pub fn snapshot(&self, id: SessionId) -> Result<PackedMatrix, StoreError> {
        Ok(self.store.get(id)?.clone())
    }

    /// Decompresses a stored session into its dense matrix (read-only path;
    /// the stored form is untouched).
    pub fn render(&self, id: SessionId) -> Result<DenseMatrix, StoreError> {
        Ok(self.store.get(id)?.unpack()?)
    }

    /// Serializes a stored session's packed form to pretty JSON.
    pub fn export(&self, id: SessionId) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self.store.get(id)?)?)
    }

    /// Removes a session from the store.
    pub fn close(&mut self, id: SessionId) -> Result<(), StoreError> {
        self.store.remove(id)?;
        tracing::info!("closed session {}", id);
        Ok(())
    }

    /// Lists all stored sessions.
    pub fn list(&self) -> Vec<SessionSummary> {
        self.store.list()
    }
}
