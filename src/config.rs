//! Reduction configuration.
//!
//! A configuration names everything that can change the *work* done for a
//! filtration: reduction variant, column representation, whether to reduce
//! the coboundary matrix, and which pairs to report. Variant,
//! representation and dualization never change the resulting pairs.

use serde::{Deserialize, Serialize};

use crate::canonical::{canonical_hash_hex, CanonicalError};
use crate::pairing::PairingOptions;
use crate::reduction::Algorithm;
use crate::representation::RepresentationKind;
use crate::CONFIG_SCHEMA_VERSION;

/// End-to-end reduction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Reduction variant.
    pub algorithm: Algorithm,
    /// Column representation used by [`compute_pairing`](crate::compute_pairing).
    pub representation: RepresentationKind,
    /// Reduce the anti-transposed (coboundary) matrix instead.
    pub dualize: bool,
    /// Pair reporting options.
    pub pairing: PairingOptions,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReductionConfig {
    /// Standard reduction over sorted-vector columns.
    pub fn standard() -> Self {
        Self {
            algorithm: Algorithm::Standard,
            representation: RepresentationKind::Vector,
            dualize: false,
            pairing: PairingOptions::default(),
        }
    }

    /// Twist reduction over sorted-vector columns.
    pub fn twist() -> Self {
        Self {
            algorithm: Algorithm::Twist,
            ..Self::standard()
        }
    }

    /// Twist reduction of the coboundary matrix (persistent cohomology).
    pub fn cohomology() -> Self {
        Self {
            algorithm: Algorithm::Twist,
            dualize: true,
            ..Self::standard()
        }
    }

    /// Builder: set the column representation.
    pub fn with_representation(mut self, representation: RepresentationKind) -> Self {
        self.representation = representation;
        self
    }

    /// Builder: set the pairing options.
    pub fn with_pairing(mut self, pairing: PairingOptions) -> Self {
        self.pairing = pairing;
        self
    }

    /// Identifier of the configured pipeline, e.g. `twist/vector/dual`.
    pub fn pipeline_id(&self) -> String {
        format!(
            "{}/{}/{}",
            self.algorithm,
            self.representation,
            if self.dualize { "dual" } else { "primal" }
        )
    }

    /// Deterministic hash of the configuration and schema version.
    pub fn params_hash(&self) -> Result<String, CanonicalError> {
        canonical_hash_hex(&(CONFIG_SCHEMA_VERSION, self))
    }
}
