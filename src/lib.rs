//! # homology-kernel
//!
//! Deterministic boundary-matrix reduction for persistent homology.
//!
//! The kernel answers one question:
//!
//! > Given a filtered simplicial complex, over which filtration interval does
//! > each topological feature exist?
//!
//! ## Core Contract
//!
//! 1. Build a sparse GF(2) boundary matrix from a caller-supplied filtration
//! 2. Reduce it until every nonempty column has a unique low index
//! 3. Extract (birth, death, dimension) persistence pairs from the pivots
//!
//! ## Architecture
//!
//! ```text
//! Filtration → BoundaryMatrix<R> → ReductionAlgorithm → PivotMap → PersistencePairing
//!                    ↓                     ↓
//!        Representation (Vector,    Standard | Twist
//!         Set, List, Hash)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same filtration → identical pairing for every reduction variant,
//!   column representation, and for the dualized (cohomology) matrix
//! - Pairs are ordered by birth position
//! - Filtrations are never reordered; caller order resolves ties
//!
//! ## Example
//!
//! ```rust
//! use homology_kernel::{compute_pairing, Filtration, ReductionConfig};
//!
//! let mut filtration = Filtration::new();
//! let a = filtration.push_vertex(0.0);
//! let b = filtration.push_vertex(0.0);
//! let c = filtration.push_vertex(0.0);
//! let ab = filtration.push_simplex(vec![a, b], 1.0);
//! let bc = filtration.push_simplex(vec![b, c], 1.0);
//! let ac = filtration.push_simplex(vec![a, c], 1.0);
//!
//! let pairing = compute_pairing(&filtration, &ReductionConfig::twist()).unwrap();
//! assert_eq!(pairing.betti_numbers(), vec![1, 1]);
//! # let _ = (ab, bc, ac);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod representation;
pub mod matrix;
pub mod reduction;
pub mod pairing;
pub mod config;
pub mod canonical;
pub mod engine;

// Re-exports
pub use types::{
    ColumnIndex, FilteredSimplex, Filtration,
    PersistencePair, PersistencePairing, PersistenceInterval,
};
pub use representation::{
    Representation, RepresentationKind,
    VectorColumn, SetColumn, ListColumn, HashColumn,
};
pub use matrix::{BoundaryMatrix, MatrixError, MatrixSnapshot, ReductionState};
pub use reduction::{
    Algorithm, PivotMap, ReductionAlgorithm, ReductionOutcome, ReductionStats,
    StandardReduction, TwistReduction,
};
pub use pairing::{extract_pairs, PairingOptions};
pub use config::ReductionConfig;
pub use canonical::{canonical_hash, canonical_hash_hex, to_canonical_bytes, CanonicalError};
pub use engine::{compute, compute_pairing, PersistenceComputation};

/// Schema version of serialized kernel types.
/// Increment on breaking changes to any serialized type.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
