//! Band compression and its inverse.
//!
//! [`pack`] flattens the lower triangle of a symmetric matrix into the
//! `(values, pointers)` pair described by [`PackedMatrix`];
//! [`PackedMatrix::unpack`] reconstructs the dense matrix. Packing is lossy
//! outside the declared band: any non-zero the profile does not cover is
//! dropped, and a round trip restores exactly the in-band entries.

use crate::error::CoreError;
use crate::matrix::DenseMatrix;
use crate::packed::PackedMatrix;
use crate::profile::BandProfile;

/// Compresses `matrix` into packed form under `profile`.
///
/// For each row `i` the entries for columns `i - band_width(i) ..= i` are
/// appended to `values` in increasing column order, diagonal last, and
/// `pointers[i]` records the diagonal's position. Runs in
/// `O(sum(band_width(i) + 1))`.
pub fn pack(matrix: &DenseMatrix, profile: BandProfile) -> PackedMatrix {
    let n = matrix.size();
    let mut values = Vec::new();
    let mut pointers = Vec::with_capacity(n);

    for i in 0..n {
        let start_col = i - profile.band_width_of(i);
        for j in start_col..=i {
            values.push(matrix.get(i, j));
        }
        pointers.push(values.len() - 1);
    }

    PackedMatrix::new_unchecked(values, pointers, profile, n)
}

impl PackedMatrix {
    /// Reconstructs the dense symmetric matrix from packed form.
    ///
    /// Row `i`'s slice is written left-to-right into columns
    /// `i - band_width(i) ..= i`, mirroring every off-diagonal entry into
    /// the upper triangle. Cells outside every stored band come back zero.
    ///
    /// Errors with [`CoreError::CorruptState`] when the packed invariants
    /// do not hold; an inconsistent instance is never partially decoded.
    pub fn unpack(&self) -> Result<DenseMatrix, CoreError> {
        self.validate()?;

        let n = self.total_size();
        let mut matrix = DenseMatrix::zeros(n);
        let mut value_index = 0;

        for i in 0..n {
            let start_col = i - self.profile().band_width_of(i);
            for j in start_col..=i {
                matrix.set(i, j, self.values()[value_index]);
                value_index += 1;
            }
        }

        Ok(matrix)
    }
}
