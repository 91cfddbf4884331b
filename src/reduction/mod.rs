//! Boundary matrix reduction.
//!
//! A reduction adds earlier columns into later ones until no two nonempty
//! columns share a low index. The result is recorded in a [`PivotMap`]
//! from low index to column. Every variant must produce the same pivot map
//! as [`StandardReduction`]; variants differ only in how much work they do.

pub mod standard;
pub mod twist;

use serde::{Deserialize, Serialize};

use crate::matrix::BoundaryMatrix;
use crate::representation::Representation;

pub use standard::StandardReduction;
pub use twist::TwistReduction;

/// Injective map from low index to the column that claims it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotMap {
    /// `lookup[low]` is the column whose low is `low`.
    lookup: Vec<Option<usize>>,
    len: usize,
}

impl PivotMap {
    /// Create an empty map for a matrix with `size` columns.
    pub fn with_size(size: usize) -> Self {
        Self { lookup: vec![None; size], len: 0 }
    }

    /// Column claiming a low index, if any.
    pub fn get(&self, low: usize) -> Option<usize> {
        self.lookup.get(low).copied().flatten()
    }

    /// Check if a row index is claimed as a low.
    pub fn contains_low(&self, low: usize) -> bool {
        self.get(low).is_some()
    }

    /// Number of (low, column) entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no column claims a low.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over `(low, column)` entries in ascending low order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lookup
            .iter()
            .enumerate()
            .filter_map(|(low, column)| column.map(|c| (low, c)))
    }

    /// Check that no column appears twice and every column follows its low.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.lookup.len()];
        for (low, column) in self.iter() {
            if column <= low || column >= seen.len() || seen[column] {
                return false;
            }
            seen[column] = true;
        }
        true
    }

    fn insert(&mut self, low: usize, column: usize) {
        debug_assert!(self.lookup[low].is_none(), "low {low} already claimed");
        self.lookup[low] = Some(column);
        self.len += 1;
    }
}

/// Work counters of one reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionStats {
    /// Column additions performed.
    pub column_additions: usize,
    /// Columns zeroed by clearing instead of being reduced.
    pub cleared_columns: usize,
}

/// Result of reducing a matrix in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionOutcome {
    /// Low index → column of the reduced matrix.
    pub pivots: PivotMap,
    /// Work counters.
    pub stats: ReductionStats,
}

/// Named reduction variant, selectable at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Left-to-right column reduction.
    #[default]
    Standard,
    /// Dimension-descending reduction with clearing.
    Twist,
}

impl Algorithm {
    /// Stable identifier used in logs and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Twist => "twist",
        }
    }

    /// Reduce a matrix in place with this variant.
    pub fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) -> ReductionOutcome {
        match self {
            Self::Standard => StandardReduction.reduce(matrix),
            Self::Twist => TwistReduction.reduce(matrix),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for reduction variants.
///
/// Implementations transform the matrix in place, leave it in
/// [`ReductionState::Reduced`](crate::matrix::ReductionState::Reduced), and
/// return the pivot map. Malformed matrices cannot reach a reduction: the
/// matrix constructors reject them.
pub trait ReductionAlgorithm {
    /// Variant this type implements.
    const ALGORITHM: Algorithm;

    /// Reduce the matrix in place.
    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) -> ReductionOutcome;
}

/// Reduce column `j` against the columns already claimed in `pivots`.
///
/// Each addition removes the current low and can only introduce smaller
/// rows, so the loop terminates. Returns the new low if the column stays
/// nonempty, after recording it in `pivots`.
pub(crate) fn reduce_column<R: Representation>(
    matrix: &mut BoundaryMatrix<R>,
    j: usize,
    pivots: &mut PivotMap,
    stats: &mut ReductionStats,
) -> Option<usize> {
    while let Some(low) = matrix.low(j) {
        match pivots.get(low) {
            Some(k) => {
                matrix.add_column(k, j);
                stats.column_additions += 1;
            }
            None => {
                pivots.insert(low, j);
                return Some(low);
            }
        }
    }
    None
}

pub(crate) fn log_outcome<R: Representation>(
    algorithm: Algorithm,
    matrix: &BoundaryMatrix<R>,
    outcome: &ReductionOutcome,
) {
    tracing::debug!(
        algorithm = algorithm.as_str(),
        representation = R::KIND.as_str(),
        columns = matrix.size(),
        dualized = matrix.is_dualized(),
        pivots = outcome.pivots.len(),
        additions = outcome.stats.column_additions,
        cleared = outcome.stats.cleared_columns,
        "boundary matrix reduced"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_map_basics() {
        let mut pivots = PivotMap::with_size(4);
        assert!(pivots.is_empty());

        pivots.insert(1, 3);
        pivots.insert(0, 2);

        assert_eq!(pivots.get(1), Some(3));
        assert_eq!(pivots.get(2), None);
        assert_eq!(pivots.get(99), None);
        assert!(pivots.contains_low(0));
        assert_eq!(pivots.iter().collect::<Vec<_>>(), vec![(0, 2), (1, 3)]);
        assert!(pivots.is_consistent());
    }

    #[test]
    fn test_pivot_map_detects_shared_column() {
        let mut pivots = PivotMap::with_size(4);
        pivots.insert(0, 3);
        pivots.insert(1, 3);
        assert!(!pivots.is_consistent());
    }

    #[test]
    fn test_algorithm_serde_names() {
        assert_eq!(serde_json::to_string(&Algorithm::Twist).unwrap(), "\"twist\"");
        let parsed: Algorithm = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(parsed, Algorithm::Standard);
    }
}
