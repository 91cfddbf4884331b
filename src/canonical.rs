//! Canonical serialization for deterministic fingerprints.
//!
//! Pairings and configurations are hashed over their canonical JSON form so
//! that two runs, reduction variants or column representations can be
//! compared by a single string.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: Struct fields serialize in declaration order
//! - Stable Vec order: Vectors serialize in index order
//! - No HashMap allowed: hashed types use Vec or BTreeMap

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Error type for canonical serialization.
#[derive(Debug, thiserror::Error)]
pub enum CanonicalError {
    /// The value could not be serialized to JSON.
    #[error("Canonical serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serialize a value to canonical JSON bytes for hashing.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonicalError> {
    serde_json::to_vec(value).map_err(|err| {
        tracing::warn!(error = %err, "canonical serialization failed");
        CanonicalError::from(err)
    })
}

/// Compute canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> Result<u64, CanonicalError> {
    let bytes = to_canonical_bytes(value)?;
    Ok(xxh64(&bytes, 0))
}

/// Compute canonical hash and return as hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    Ok(format!("{:016x}", canonical_hash(value)?))
}
