//! Bandwidth profiles: how much of each row the packed form retains.
//!
//! Two policies exist, modeled as one tagged variant consumed everywhere
//! through [`BandProfile::band_width_of`]:
//!
//! - [`BandProfile::Uniform`] stores a rectangular band: every row keeps
//!   `max_band_width` columns left of the diagonal (clamped at column 0), so
//!   explicit zeros inside the band are retained.
//! - [`BandProfile::Variable`] is tight per row: row `i` keeps exactly the
//!   columns from its leftmost non-zero to the diagonal. This is the
//!   canonical policy; the packed mutator's grow/shrink cases are defined
//!   against it.

use serde::{Deserialize, Serialize};

use crate::matrix::DenseMatrix;

/// Selector for which profiling policy to apply at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandPolicy {
    /// Single global bandwidth for every row.
    Uniform,
    /// Tight per-row bandwidths.
    Variable,
}

impl BandPolicy {
    /// Profiles a dense matrix under this policy.
    pub fn profile_of(self, matrix: &DenseMatrix) -> BandProfile {
        match self {
            BandPolicy::Uniform => BandProfile::uniform_of(matrix),
            BandPolicy::Variable => BandProfile::variable_of(matrix),
        }
    }
}

/// A bandwidth profile: uniform scalar or per-row sequence.
///
/// Invariant: `band_width_of(i) <= i` for every row (enforced by clamping
/// in the Uniform case and by construction in the Variable case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BandProfile {
    /// Global maximum distance from the diagonal over all non-zero cells.
    Uniform(usize),
    /// `band_widths[i]` = columns strictly left of the diagonal retained
    /// for row `i`.
    Variable(Vec<usize>),
}

impl BandProfile {
    /// Computes the uniform profile: `max |i - j|` over non-zero cells.
    pub fn uniform_of(matrix: &DenseMatrix) -> Self {
        let max = matrix
            .non_zero_cells()
            .map(|(i, j, _)| i.abs_diff(j))
            .max()
            .unwrap_or(0);
        BandProfile::Uniform(max)
    }

    /// Computes the tight per-row profile.
    ///
    /// `band_widths[i] = i - j*` where `j*` is the smallest column with a
    /// non-zero entry in row `i` at or before the diagonal, or 0 when the
    /// row has no off-diagonal non-zero.
    pub fn variable_of(matrix: &DenseMatrix) -> Self {
        let n = matrix.size();
        let band_widths = (0..n)
            .map(|i| {
                (0..i)
                    .find(|&j| matrix.get(i, j) != 0.0)
                    .map(|j| i - j)
                    .unwrap_or(0)
            })
            .collect();
        BandProfile::Variable(band_widths)
    }

    /// Bandwidth retained for `row` under this profile.
    pub fn band_width_of(&self, row: usize) -> usize {
        match self {
            BandProfile::Uniform(max) => (*max).min(row),
            BandProfile::Variable(widths) => widths[row],
        }
    }

    /// Whether this is the tight per-row policy.
    pub fn is_variable(&self) -> bool {
        matches!(self, BandProfile::Variable(_))
    }
}
