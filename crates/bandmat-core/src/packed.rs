//! The packed matrix and its in-place single-element mutator.
//!
//! [`PackedMatrix`] owns the `(values, pointers)` pair produced by
//! [`pack`](crate::pack::pack). `pointers[i]` is the index in `values` of
//! row `i`'s diagonal entry; row `i` occupies
//! `values[pointers[i-1]+1 ..= pointers[i]]` (row 0 starts at 0),
//! representing columns `i - band_width(i) ..= i` in increasing order.
//!
//! [`PackedMatrix::update`] mutates one logical cell while the matrix stays
//! compressed. Only the lower triangle is stored, so updating `(row, col)`
//! is by definition also the update of `(col, row)`. Under the tight
//! per-row (Variable) profile the stored band grows and shrinks in place;
//! under the rectangular Uniform profile a structural change falls back to
//! a full unpack-reprofile-repack rebuild.
//!
//! Invariants (checked by [`PackedMatrix::validate`]):
//! - `pointers` strictly increasing, `pointers.len() == total_size`;
//! - `pointers[i] - pointers[i-1] - 1 == band_width(i)` (row 0:
//!   `pointers[0] == 0`);
//! - `pointers[n-1] + 1 == values.len()`;
//! - `band_width(i) <= i` for every row.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pack::pack;
use crate::profile::BandProfile;

/// A symmetric matrix in banded compressed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedMatrix {
    values: Vec<f64>,
    pointers: Vec<usize>,
    profile: BandProfile,
    /// Matrix dimension `n`, kept for bounds checks independent of the
    /// packed length.
    total_size: usize,
}

impl PackedMatrix {
    /// Assembles a packed matrix without validating invariants.
    ///
    /// Reserved for [`pack`], which constructs consistent output by
    /// definition. Everything arriving from outside the crate goes through
    /// [`PackedMatrix::from_parts`].
    pub(crate) fn new_unchecked(
        values: Vec<f64>,
        pointers: Vec<usize>,
        profile: BandProfile,
        total_size: usize,
    ) -> Self {
        PackedMatrix {
            values,
            pointers,
            profile,
            total_size,
        }
    }

    /// Reassembles a packed matrix from stored parts, validating all
    /// invariants.
    ///
    /// This is how a persistence layer reconstructs an instance without
    /// re-packing; inconsistent parts are rejected with
    /// [`CoreError::CorruptState`].
    pub fn from_parts(
        values: Vec<f64>,
        pointers: Vec<usize>,
        profile: BandProfile,
        total_size: usize,
    ) -> Result<Self, CoreError> {
        let packed = PackedMatrix {
            values,
            pointers,
            profile,
            total_size,
        };
        packed.validate()?;
        Ok(packed)
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// The flat value buffer (row slices, diagonals last).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Diagonal pointers, one per row.
    pub fn pointers(&self) -> &[usize] {
        &self.pointers
    }

    /// The bandwidth profile this matrix was packed under.
    pub fn profile(&self) -> &BandProfile {
        &self.profile
    }

    /// Matrix dimension `n`.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Index in `values` where row `row`'s slice begins.
    fn row_start(&self, row: usize) -> usize {
        if row == 0 {
            0
        } else {
            self.pointers[row - 1] + 1
        }
    }

    /// Stored bandwidth of `row`, derived from the pointers.
    fn stored_band_width(&self, row: usize) -> Result<usize, CoreError> {
        let diagonal = *self
            .pointers
            .get(row)
            .ok_or_else(|| CoreError::CorruptState {
                reason: format!(
                    "pointers has {} entries, need row {}",
                    self.pointers.len(),
                    row
                ),
            })?;
        diagonal
            .checked_sub(self.row_start(row))
            .ok_or_else(|| CoreError::CorruptState {
                reason: format!("pointers not increasing at row {}", row),
            })
    }

    /// Reads the logical cell `(row, col)` without decompressing.
    ///
    /// Cells outside the stored band are implicit zeros.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, CoreError> {
        if row >= self.total_size || col >= self.total_size {
            return Err(CoreError::IndexOutOfRange {
                row,
                col,
                size: self.total_size,
            });
        }
        let (row, col) = if row >= col { (row, col) } else { (col, row) };
        let distance = row - col;
        if distance > self.stored_band_width(row)? {
            return Ok(0.0);
        }
        let pos = self.pointers[row] - distance;
        self.values
            .get(pos)
            .copied()
            .ok_or_else(|| CoreError::CorruptState {
                reason: format!("value index {} outside buffer of {}", pos, self.values.len()),
            })
    }

    // -----------------------------------------------------------------------
    // In-place mutation
    // -----------------------------------------------------------------------

    /// Updates one logical cell while the matrix stays compressed.
    ///
    /// Cases:
    /// 1. in-band: overwrite `values[pointers[row] - distance]`, `O(1)`;
    /// 2. boundary zero-out (Variable profile): overwrite, then rescan the
    ///    row for its tight bandwidth and drop the leading entries, shifting
    ///    all later rows left;
    /// 3. out-of-band non-zero: extend the row's slice to the new bandwidth,
    ///    zero-filling the gap columns, shifting all later rows right
    ///    (Variable profile; Uniform falls back to a rebuild);
    /// 4. out-of-band zero: no-op.
    pub fn update(&mut self, row: usize, col: usize, new_value: f64) -> Result<(), CoreError> {
        if row >= self.total_size || col >= self.total_size {
            return Err(CoreError::IndexOutOfRange {
                row,
                col,
                size: self.total_size,
            });
        }
        // Only the lower triangle is stored; canonicalize to row >= col.
        let (row, col) = if row >= col { (row, col) } else { (col, row) };
        let distance = row - col;
        let band_width = self.stored_band_width(row)?;

        if distance <= band_width {
            let pos = self.pointers[row] - distance;
            if pos >= self.values.len() {
                return Err(CoreError::CorruptState {
                    reason: format!(
                        "value index {} outside buffer of {}",
                        pos,
                        self.values.len()
                    ),
                });
            }
            self.values[pos] = new_value;
            // Zeroing the left edge of a tight band leaves it loose;
            // re-tighten so later growth stays well-defined.
            if new_value == 0.0
                && distance == band_width
                && band_width > 0
                && self.profile.is_variable()
            {
                self.shrink_row(row, band_width);
            }
            return Ok(());
        }

        if new_value == 0.0 {
            // An implicit zero set to zero: nothing stored, nothing to do.
            return Ok(());
        }

        if self.profile.is_variable() {
            self.grow_row(row, band_width, distance, new_value);
            Ok(())
        } else {
            // The rectangular Uniform band cannot widen per row; rebuild
            // from the dense form with a fresh global bandwidth.
            self.rebuild_with(row, col, new_value)
        }
    }

    /// Case 2: removes the leading entries of `row`'s slice down to its
    /// tight bandwidth and shifts every later row's pointer left.
    fn shrink_row(&mut self, row: usize, old_band_width: usize) {
        let start = self.row_start(row);
        let diagonal = self.pointers[row];
        let new_band_width = (start..diagonal)
            .find(|&pos| self.values[pos] != 0.0)
            .map(|pos| diagonal - pos)
            .unwrap_or(0);
        let delta = old_band_width - new_band_width;

        self.values.drain(start..start + delta);
        for pointer in &mut self.pointers[row..] {
            *pointer -= delta;
        }
        if let BandProfile::Variable(widths) = &mut self.profile {
            widths[row] = new_band_width;
        }
    }

    /// Case 3: widens `row`'s slice to `distance`, placing `new_value` at
    /// the new left edge, zero-filling the gap columns, and shifting every
    /// later row's pointer right.
    fn grow_row(&mut self, row: usize, old_band_width: usize, distance: usize, new_value: f64) {
        let start = self.row_start(row);
        let delta = distance - old_band_width;

        let mut inserted = vec![0.0; delta];
        inserted[0] = new_value;
        self.values.splice(start..start, inserted);
        for pointer in &mut self.pointers[row..] {
            *pointer += delta;
        }
        if let BandProfile::Variable(widths) = &mut self.profile {
            widths[row] = distance;
        }
    }

    /// Uniform-profile fallback: decompress, apply the write, re-profile
    /// globally, and re-pack.
    fn rebuild_with(&mut self, row: usize, col: usize, new_value: f64) -> Result<(), CoreError> {
        let mut dense = self.unpack()?;
        dense.set(row, col, new_value);
        let profile = BandProfile::uniform_of(&dense);
        *self = pack(&dense, profile);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Invariant checking
    // -----------------------------------------------------------------------

    /// Verifies every packed-form invariant.
    ///
    /// A failure means the instance is inconsistent and must be discarded
    /// or rebuilt, never patched further.
    pub fn validate(&self) -> Result<(), CoreError> {
        let n = self.total_size;

        if self.pointers.len() != n {
            return Err(CoreError::CorruptState {
                reason: format!("{} pointers for matrix of size {}", self.pointers.len(), n),
            });
        }
        if let BandProfile::Variable(widths) = &self.profile {
            if widths.len() != n {
                return Err(CoreError::CorruptState {
                    reason: format!("{} band widths for matrix of size {}", widths.len(), n),
                });
            }
        }
        if n == 0 {
            if !self.values.is_empty() {
                return Err(CoreError::CorruptState {
                    reason: "values non-empty for empty matrix".to_string(),
                });
            }
            return Ok(());
        }

        let mut expected_start = 0;
        for row in 0..n {
            let diagonal = self.pointers[row];
            let band_width = diagonal.checked_sub(expected_start).ok_or_else(|| {
                CoreError::CorruptState {
                    reason: format!("pointers not increasing at row {}", row),
                }
            })?;
            if band_width > row {
                return Err(CoreError::CorruptState {
                    reason: format!("row {} stores band width {}", row, band_width),
                });
            }
            if band_width != self.profile.band_width_of(row) {
                return Err(CoreError::CorruptState {
                    reason: format!(
                        "row {} stores band width {} but profile says {}",
                        row,
                        band_width,
                        self.profile.band_width_of(row)
                    ),
                });
            }
            expected_start = diagonal + 1;
        }

        if expected_start != self.values.len() {
            return Err(CoreError::CorruptState {
                reason: format!(
                    "pointers cover {} values, buffer holds {}",
                    expected_start,
                    self.values.len()
                ),
            });
        }
        Ok(())
    }
}
