//! Standard left-to-right reduction.
//!
//! ## Algorithm
//!
//! 1. Start with an empty pivot map
//! 2. For each column `j` in ascending order:
//!    - While the column is nonempty and its low is claimed by column `k < j`,
//!      add column `k` into column `j`
//!    - If the column is still nonempty, claim its low for `j`
//!
//! Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//! and Simplification".

use super::{log_outcome, reduce_column, Algorithm, PivotMap, ReductionAlgorithm, ReductionOutcome, ReductionStats};
use crate::matrix::{BoundaryMatrix, ReductionState};
use crate::representation::Representation;

/// Standard column reduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReduction;

impl ReductionAlgorithm for StandardReduction {
    const ALGORITHM: Algorithm = Algorithm::Standard;

    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) -> ReductionOutcome {
        let n = matrix.size();
        matrix.set_state(ReductionState::Reducing);

        let mut pivots = PivotMap::with_size(n);
        let mut stats = ReductionStats::default();

        for j in 0..n {
            reduce_column(matrix, j, &mut pivots, &mut stats);
        }

        matrix.set_state(ReductionState::Reduced);
        let outcome = ReductionOutcome { pivots, stats };
        log_outcome(Self::ALGORITHM, matrix, &outcome);
        outcome
    }
}
