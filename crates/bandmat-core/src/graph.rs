//! Graph ingestion: ordered node labels plus weighted edges.
//!
//! [`EdgeListGraph`] is the entry point for building the symmetric adjacency
//! matrix. Node labels are assigned dense indices `0..n-1` in first-seen
//! order: declared labels first, then any label that only appears as an edge
//! endpoint. Edges are undirected; the same pair written twice keeps the
//! last weight.
//!
//! Weights arrive as text (the upstream collaborator hands over raw cell
//! content) and a malformed weight is the only ingestion failure,
//! surfaced as [`CoreError::ParseError`].

use indexmap::IndexMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::CoreError;
use crate::matrix::DenseMatrix;

/// An undirected weighted graph under construction.
///
/// Wraps a petgraph [`UnGraph`] whose node indices are the matrix row/column
/// indices, plus a label lookup kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    graph: UnGraph<String, f64, u32>,
    indices: IndexMap<String, NodeIndex<u32>>,
}

impl EdgeListGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        EdgeListGraph {
            graph: UnGraph::default(),
            indices: IndexMap::new(),
        }
    }

    /// Declares a node, assigning it the next dense index if unseen.
    ///
    /// Re-declaring an existing label is a no-op and returns its index.
    pub fn declare_node(&mut self, label: &str) -> NodeIndex<u32> {
        if let Some(&idx) = self.indices.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(label.to_string());
        self.indices.insert(label.to_string(), idx);
        idx
    }

    /// Adds an undirected weighted edge, parsing the raw weight text.
    ///
    /// Endpoint labels not yet declared join the node set at the next free
    /// index. A repeated pair overwrites the previous weight (last write
    /// wins). A self-edge is allowed and ends up on the matrix diagonal.
    pub fn add_weighted_edge(
        &mut self,
        from: &str,
        to: &str,
        raw_weight: &str,
    ) -> Result<(), CoreError> {
        let weight: f64 = raw_weight
            .trim()
            .parse()
            .map_err(|_| CoreError::ParseError {
                from: from.to_string(),
                to: to.to_string(),
                raw: raw_weight.to_string(),
            })?;

        let from_idx = self.declare_node(from);
        let to_idx = self.declare_node(to);
        self.graph.update_edge(from_idx, to_idx, weight);
        Ok(())
    }

    /// Number of nodes (the matrix dimension).
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node labels in index order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(String::as_str)
    }

    /// Looks up the dense index assigned to a label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.indices.get(label).map(|idx| idx.index())
    }

    /// Builds the dense symmetric adjacency matrix.
    ///
    /// Every edge weight is written into both triangles; cells with no edge
    /// stay zero.
    pub fn to_dense(&self) -> DenseMatrix {
        let mut matrix = DenseMatrix::zeros(self.graph.node_count());
        for edge in self.graph.edge_references() {
            matrix.set(
                edge.source().index(),
                edge.target().index(),
                *edge.weight(),
            );
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_labels_get_first_seen_indices() {
        let mut g = EdgeListGraph::new();
        g.declare_node("A");
        g.declare_node("B");
        g.declare_node("A");
        g.declare_node("C");

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.index_of("A"), Some(0));
        assert_eq!(g.index_of("B"), Some(1));
        assert_eq!(g.index_of("C"), Some(2));
    }

    #[test]
    fn edge_endpoint_extends_node_set() {
        let mut g = EdgeListGraph::new();
        g.declare_node("A");
        g.add_weighted_edge("A", "X", "2.5").unwrap();

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.index_of("X"), Some(1));
        let m = g.to_dense();
        assert_eq!(m.get(0, 1), 2.5);
        assert_eq!(m.get(1, 0), 2.5);
    }

    #[test]
    fn malformed_weight_is_parse_error() {
        let mut g = EdgeListGraph::new();
        let result = g.add_weighted_edge("A", "B", "not-a-number");
        assert!(matches!(result, Err(CoreError::ParseError { .. })));
        // Failed edge must not have touched the graph.
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn duplicate_edge_last_write_wins() {
        let mut g = EdgeListGraph::new();
        g.add_weighted_edge("A", "B", "1").unwrap();
        g.add_weighted_edge("B", "A", "9").unwrap();

        assert_eq!(g.edge_count(), 1);
        let m = g.to_dense();
        assert_eq!(m.get(0, 1), 9.0);
        assert_eq!(m.get(1, 0), 9.0);
    }

    #[test]
    fn self_edge_sets_diagonal() {
        let mut g = EdgeListGraph::new();
        g.add_weighted_edge("A", "A", "4").unwrap();
        let m = g.to_dense();
        assert_eq!(m.get(0, 0), 4.0);
    }

    #[test]
    fn path_graph_adjacency() {
        let mut g = EdgeListGraph::new();
        for label in ["A", "B", "C", "D"] {
            g.declare_node(label);
        }
        g.add_weighted_edge("A", "B", "1").unwrap();
        g.add_weighted_edge("B", "C", "1").unwrap();
        g.add_weighted_edge("C", "D", "1").unwrap();

        let m = g.to_dense();
        assert_eq!(m.size(), 4);
        for i in 0..3 {
            assert_eq!(m.get(i, i + 1), 1.0);
            assert_eq!(m.get(i + 1, i), 1.0);
        }
        assert_eq!(m.get(0, 2), 0.0);
        assert_eq!(m.get(0, 3), 0.0);
    }
}
