//! Persistence pair extraction.
//!
//! Converts the pivot map of a reduced matrix into persistence pairs:
//!
//! - every `(low, j)` pivot is a finite pair `(low, j)` in the dimension of
//!   `low`
//! - every empty column whose index is never a low is an essential class
//!
//! Pairs of a dualized (coboundary) matrix are mapped back onto primal
//! positions, so both matrices yield the same pairing. Zero-persistence
//! pairs are kept; removing them is left to diagram code.

use serde::{Deserialize, Serialize};

use crate::matrix::BoundaryMatrix;
use crate::reduction::PivotMap;
use crate::representation::Representation;
use crate::types::{PersistencePair, PersistencePairing};

/// Options controlling which pairs are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingOptions {
    /// Report unpaired simplices of the top dimension as essential classes.
    ///
    /// When a complex is a truncated skeleton, unpaired top-dimensional
    /// simplices would be destroyed by the missing higher simplices, so
    /// callers truncating their complex usually disable this.
    pub include_all_unpaired_creators: bool,
    /// Drop pairs whose homological dimension exceeds this value.
    pub max_dimension: Option<usize>,
}

impl Default for PairingOptions {
    fn default() -> Self {
        Self {
            include_all_unpaired_creators: true,
            max_dimension: None,
        }
    }
}

impl PairingOptions {
    fn admits(&self, dimension: usize) -> bool {
        self.max_dimension.map_or(true, |max| dimension <= max)
    }
}

/// Extract persistence pairs from a reduced matrix and its pivot map.
///
/// Pairs are returned in ascending birth order.
pub fn extract_pairs<R: Representation>(
    matrix: &BoundaryMatrix<R>,
    pivots: &PivotMap,
    options: &PairingOptions,
) -> PersistencePairing {
    let n = matrix.size();
    let top_dimension = matrix.top_dimension();
    let mut pairs: Vec<PersistencePair> = Vec::with_capacity(n.saturating_sub(pivots.len()));

    for (low, column) in pivots.iter() {
        let (birth, death) = if matrix.is_dualized() {
            (matrix.primal_index(column), matrix.primal_index(low))
        } else {
            (low, column)
        };
        debug_assert!(birth < death, "pair ({birth}, {death}) is not ordered");

        let dimension = matrix.primal_dimension(birth);
        if options.admits(dimension) {
            pairs.push(PersistencePair::finite(birth, death, dimension));
        }
    }

    let mut skipped_top = 0usize;
    for i in 0..n {
        if !matrix.column(i).is_empty() || pivots.contains_low(i) {
            continue;
        }
        let birth = matrix.primal_index(i);
        let dimension = matrix.primal_dimension(birth);

        if !options.include_all_unpaired_creators && dimension == top_dimension {
            skipped_top += 1;
            continue;
        }
        if options.admits(dimension) {
            pairs.push(PersistencePair::essential(birth, dimension));
        }
    }

    let pairing = PersistencePairing::new(pairs);
    tracing::debug!(
        pairs = pairing.len(),
        essential = pairing.essential().count(),
        skipped_top,
        dualized = matrix.is_dualized(),
        "persistence pairs extracted"
    );
    pairing
}
