//! Dense symmetric matrix backing the packing pipeline.
//!
//! [`DenseMatrix`] is an `n x n` grid stored row-major in one flat buffer.
//! Symmetry is kept by construction: [`DenseMatrix::set`] writes both
//! `(i, j)` and `(j, i)`, and no other mutation path exists. Bounds are
//! validated by callers at the API boundary (ingestion and `update`), so
//! accessors index directly.

use serde::{Deserialize, Serialize};

/// An `n x n` symmetric matrix of `f64` values, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DenseMatrix {
    /// Creates a zero-filled `size x size` matrix.
    pub fn zeros(size: usize) -> Self {
        DenseMatrix {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// Matrix dimension `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reads the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.size + col]
    }

    /// Writes `value` at `(row, col)` and mirrors it to `(col, row)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = value;
        self.cells[col * self.size + row] = value;
    }

    /// Iterates over all `(row, col, value)` triples with `value != 0`.
    pub fn non_zero_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0.0)
            .map(move |(flat, &v)| (flat / n, flat % n, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_mirrors_value() {
        let mut m = DenseMatrix::zeros(3);
        m.set(2, 0, 7.5);
        assert_eq!(m.get(2, 0), 7.5);
        assert_eq!(m.get(0, 2), 7.5);
    }

    #[test]
    fn diagonal_set_writes_once() {
        let mut m = DenseMatrix::zeros(2);
        m.set(1, 1, 3.0);
        assert_eq!(m.get(1, 1), 3.0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn non_zero_cells_reports_both_triangles() {
        let mut m = DenseMatrix::zeros(3);
        m.set(1, 0, 2.0);
        let cells: Vec<_> = m.non_zero_cells().collect();
        assert_eq!(cells, vec![(0, 1, 2.0), (1, 0, 2.0)]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut m = DenseMatrix::zeros(2);
        m.set(1, 0, 4.0);
        let json = serde_json::to_string(&m).unwrap();
        let back: DenseMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
