//! End-to-end persistence computation.
//!
//! ```text
//! Filtration → BoundaryMatrix → (dualize) → Reduction → PivotMap → Pairing
//! ```

use crate::config::ReductionConfig;
use crate::matrix::{BoundaryMatrix, MatrixError};
use crate::pairing::extract_pairs;
use crate::reduction::{PivotMap, ReductionStats};
use crate::representation::{HashColumn, ListColumn, Representation, RepresentationKind, SetColumn, VectorColumn};
use crate::types::{Filtration, PersistencePairing};

/// Reduced matrix, pivots and pairs of one computation.
#[derive(Debug, Clone)]
pub struct PersistenceComputation<R: Representation> {
    /// The reduced matrix (dualized if the configuration asked for it).
    pub matrix: BoundaryMatrix<R>,
    /// Low index → column of `matrix`.
    pub pivots: PivotMap,
    /// Work counters of the reduction.
    pub stats: ReductionStats,
    /// Persistence pairs over primal filtration positions.
    pub pairing: PersistencePairing,
}

/// Compute persistence pairs of a filtration with a chosen representation.
///
/// The column representation is fixed by `R`; `config.representation` is
/// ignored here and only consulted by [`compute_pairing`].
///
/// # Errors
/// Returns a [`MatrixError`] if the filtration violates the face ordering
/// or does not fit the representation's index type.
pub fn compute<R: Representation, T>(
    filtration: &Filtration<T>,
    config: &ReductionConfig,
) -> Result<PersistenceComputation<R>, MatrixError> {
    let mut matrix = BoundaryMatrix::<R>::from_filtration(filtration)?;
    if config.dualize {
        matrix = matrix.dualized();
    }

    let outcome = config.algorithm.reduce(&mut matrix);
    let pairing = extract_pairs(&matrix, &outcome.pivots, &config.pairing);

    tracing::debug!(
        pipeline = %config.pipeline_id(),
        simplices = filtration.len(),
        pairs = pairing.len(),
        "persistence computed"
    );

    Ok(PersistenceComputation {
        matrix,
        pivots: outcome.pivots,
        stats: outcome.stats,
        pairing,
    })
}

/// Compute persistence pairs using the representation named in `config`.
///
/// Columns use `u32` row indices.
pub fn compute_pairing<T>(
    filtration: &Filtration<T>,
    config: &ReductionConfig,
) -> Result<PersistencePairing, MatrixError> {
    let pairing = match config.representation {
        RepresentationKind::Vector => compute::<VectorColumn<u32>, T>(filtration, config)?.pairing,
        RepresentationKind::Set => compute::<SetColumn<u32>, T>(filtration, config)?.pairing,
        RepresentationKind::List => compute::<ListColumn<u32>, T>(filtration, config)?.pairing,
        RepresentationKind::Hash => compute::<HashColumn<u32>, T>(filtration, config)?.pairing,
    };
    Ok(pairing)
}
