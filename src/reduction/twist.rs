//! Twist reduction (reduction with clearing).
//!
//! Columns are processed by decreasing dimension. When a column of
//! dimension `d` claims low `i`, simplex `i` is known to be a creator, so
//! column `i` (dimension `d - 1`) must reduce to zero and is cleared without
//! any additions. Within one dimension columns are reduced left to right,
//! which yields exactly the pivot map of the standard reduction.
//!
//! The clearing step relies on faces being one dimension lower than their
//! column, which [`BoundaryMatrix`](crate::matrix::BoundaryMatrix)
//! construction guarantees.
//!
//! Chen, Kerber (2011). "Persistent Homology Computation with a Twist".

use super::{log_outcome, reduce_column, Algorithm, PivotMap, ReductionAlgorithm, ReductionOutcome, ReductionStats};
use crate::matrix::{BoundaryMatrix, ReductionState};
use crate::representation::Representation;

/// Dimension-descending reduction with clearing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwistReduction;

impl ReductionAlgorithm for TwistReduction {
    const ALGORITHM: Algorithm = Algorithm::Twist;

    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) -> ReductionOutcome {
        let n = matrix.size();
        matrix.set_state(ReductionState::Reducing);

        let mut by_dimension: Vec<Vec<usize>> = vec![Vec::new(); matrix.dimension() + 1];
        for j in 0..n {
            by_dimension[matrix.dimension_of(j)].push(j);
        }

        let mut pivots = PivotMap::with_size(n);
        let mut stats = ReductionStats::default();

        for (dimension, columns) in by_dimension.iter().enumerate().rev() {
            for &j in columns {
                if let Some(low) = reduce_column(matrix, j, &mut pivots, &mut stats) {
                    if !matrix.column(low).is_empty() {
                        tracing::trace!(column = j, cleared = low, dimension, "clearing creator column");
                        matrix.clear_column(low);
                        stats.cleared_columns += 1;
                    }
                }
            }
        }

        matrix.set_state(ReductionState::Reduced);
        let outcome = ReductionOutcome { pivots, stats };
        log_outcome(Self::ALGORITHM, matrix, &outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduction::StandardReduction;
    use crate::representation::{ListColumn, VectorColumn};

    fn tetrahedron<R: Representation>() -> BoundaryMatrix<R> {
        // 4 vertices, 6 edges, 4 triangles, 1 tetrahedron.
        BoundaryMatrix::from_boundaries([
            (0, &[][..]),
            (0, &[][..]),
            (0, &[][..]),
            (0, &[][..]),
            (1, &[0, 1][..]),   // 4
            (1, &[0, 2][..]),   // 5
            (1, &[1, 2][..]),   // 6
            (1, &[0, 3][..]),   // 7
            (1, &[1, 3][..]),   // 8
            (1, &[2, 3][..]),   // 9
            (2, &[4, 5, 6][..]),  // 10
            (2, &[4, 7, 8][..]),  // 11
            (2, &[5, 7, 9][..]),  // 12
            (2, &[6, 8, 9][..]),  // 13
            (3, &[10, 11, 12, 13][..]), // 14
        ])
        .unwrap()
    }

    #[test]
    fn test_twist_matches_standard_on_tetrahedron() {
        let mut standard: BoundaryMatrix<VectorColumn<u32>> = tetrahedron();
        let mut twisted: BoundaryMatrix<ListColumn<u32>> = tetrahedron();

        let expected = StandardReduction.reduce(&mut standard);
        let outcome = TwistReduction.reduce(&mut twisted);

        assert_eq!(outcome.pivots, expected.pivots);
        assert!(twisted.has_unique_lows());
        assert!(outcome.stats.cleared_columns > 0);
        assert!(outcome.stats.column_additions <= expected.stats.column_additions);
    }

    #[test]
    fn test_twist_clears_creator_columns() {
        let mut matrix: BoundaryMatrix<VectorColumn<u32>> = tetrahedron();
        let outcome = TwistReduction.reduce(&mut matrix);

        // Triangle 13 is the low of the tetrahedron, so its column is cleared.
        assert_eq!(outcome.pivots.get(13), Some(14));
        assert!(matrix.column(13).is_empty());
        assert_eq!(matrix.state(), ReductionState::Reduced);
    }
}
