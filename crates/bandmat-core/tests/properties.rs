//! Property tests for the pack/unpack/update pipeline.
//!
//! Random symmetric matrices and random update sequences are driven through
//! the packed representation while a dense mirror receives the same writes.
//! After every step the packed form must validate, and unpacking must agree
//! with the mirror.

use proptest::prelude::*;

use bandmat_core::{pack, BandProfile, DenseMatrix, PackedMatrix};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Weights drawn from a small integer-valued set so equality checks are exact.
fn weight() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => (1i8..=9).prop_map(f64::from),
        1 => Just(0.0),
        1 => (-9i8..=-1).prop_map(f64::from),
    ]
}

/// A random symmetric matrix of dimension `1..=max_n`.
fn symmetric_matrix(max_n: usize) -> impl Strategy<Value = DenseMatrix> {
    (1..=max_n).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, weight()), 0..3 * n).prop_map(
            move |entries| {
                let mut m = DenseMatrix::zeros(n);
                for (i, j, w) in entries {
                    m.set(i, j, w);
                }
                m
            },
        )
    })
}

/// A matrix paired with a sequence of in-bounds cell writes.
fn matrix_and_updates(
    max_n: usize,
    max_updates: usize,
) -> impl Strategy<Value = (DenseMatrix, Vec<(usize, usize, f64)>)> {
    symmetric_matrix(max_n).prop_flat_map(move |m| {
        let n = m.size();
        let updates =
            proptest::collection::vec((0..n, 0..n, weight()), 0..=max_updates);
        (Just(m), updates)
    })
}

fn pack_variable(m: &DenseMatrix) -> PackedMatrix {
    pack(m, BandProfile::variable_of(m))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// A tight variable profile covers every non-zero, so a round trip is
    /// exact.
    #[test]
    fn variable_round_trip_is_exact(m in symmetric_matrix(8)) {
        let packed = pack_variable(&m);
        prop_assert!(packed.validate().is_ok());
        prop_assert_eq!(packed.unpack().unwrap(), m);
    }

    /// The uniform profile is wider than the variable one, so it is exact
    /// too.
    #[test]
    fn uniform_round_trip_is_exact(m in symmetric_matrix(8)) {
        let packed = pack(&m, BandProfile::uniform_of(&m));
        prop_assert!(packed.validate().is_ok());
        prop_assert_eq!(packed.unpack().unwrap(), m);
    }

    /// `pointers` stays consistent with `values` through arbitrary update
    /// sequences, and the packed form always mirrors a dense matrix
    /// receiving the same writes.
    #[test]
    fn updates_track_a_dense_mirror(
        (m, updates) in matrix_and_updates(8, 12),
    ) {
        let mut packed = pack_variable(&m);
        let mut mirror = m;

        for (row, col, value) in updates {
            packed.update(row, col, value).unwrap();
            mirror.set(row, col, value);

            prop_assert!(packed.validate().is_ok());
            let pointers = packed.pointers();
            prop_assert_eq!(
                pointers.last().map(|p| p + 1).unwrap_or(0),
                packed.values().len()
            );
            prop_assert_eq!(&packed.unpack().unwrap(), &mirror);
        }
    }

    /// Unpacking always yields a symmetric matrix, whatever the update
    /// history.
    #[test]
    fn unpacked_matrix_is_symmetric(
        (m, updates) in matrix_and_updates(8, 12),
    ) {
        let mut packed = pack_variable(&m);
        for (row, col, value) in updates {
            packed.update(row, col, value).unwrap();
        }

        let dense = packed.unpack().unwrap();
        for i in 0..dense.size() {
            for j in 0..i {
                prop_assert_eq!(dense.get(i, j), dense.get(j, i));
            }
        }
    }

    /// Writing the same in-band value twice leaves the packed form exactly
    /// where one write left it.
    #[test]
    fn in_band_update_is_idempotent(
        (m, updates) in matrix_and_updates(8, 1),
    ) {
        let Some(&(row, col, value)) = updates.first() else {
            return Ok(());
        };

        let mut once = pack_variable(&m);
        once.update(row, col, value).unwrap();
        let mut twice = once.clone();
        twice.update(row, col, value).unwrap();

        prop_assert_eq!(once.values(), twice.values());
        prop_assert_eq!(once.pointers(), twice.pointers());
    }

    /// Growing a row out of band and then zeroing the same cell restores the
    /// original storage, since the rescan stops at the previous leftmost
    /// non-zero.
    #[test]
    fn grow_then_zero_is_an_inverse(
        m in symmetric_matrix(8),
        row_seed in 0usize..8,
        col_seed in 0usize..8,
        value in (1i8..=9).prop_map(f64::from),
    ) {
        let n = m.size();
        prop_assume!(n >= 2);
        let row = 1 + row_seed % (n - 1);
        let col = col_seed % row;

        let packed = pack_variable(&m);
        let BandProfile::Variable(widths) = packed.profile().clone() else {
            unreachable!();
        };
        prop_assume!(row - col > widths[row]);

        let mut mutated = packed.clone();
        mutated.update(row, col, value).unwrap();
        mutated.update(row, col, 0.0).unwrap();

        prop_assert_eq!(mutated.values(), packed.values());
        prop_assert_eq!(mutated.pointers(), packed.pointers());
        prop_assert_eq!(mutated.profile(), packed.profile());
    }
}
