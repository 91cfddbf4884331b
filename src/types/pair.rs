//! Persistence pairs and intervals.
//!
//! Pairs are value objects computed once per reduction. They refer to
//! filtration positions only and hold no reference to the matrix they were
//! extracted from.

use serde::{Deserialize, Serialize};

use crate::canonical::{canonical_hash_hex, CanonicalError};
use super::filtration::Filtration;

/// A (birth, death, dimension) triple over filtration positions.
///
/// `death` is `None` for essential classes that survive to the end of the
/// filtration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersistencePair {
    /// Position of the creating simplex.
    pub birth: usize,
    /// Position of the destroying simplex, if any.
    pub death: Option<usize>,
    /// Homological dimension of the class (dimension of the creator).
    pub dimension: usize,
}

impl PersistencePair {
    /// Create a finite pair.
    pub fn finite(birth: usize, death: usize, dimension: usize) -> Self {
        Self { birth, death: Some(death), dimension }
    }

    /// Create an essential pair.
    pub fn essential(birth: usize, dimension: usize) -> Self {
        Self { birth, death: None, dimension }
    }

    /// Check if the class is never destroyed.
    pub fn is_essential(&self) -> bool {
        self.death.is_none()
    }

    /// Map the pair onto filtration values.
    ///
    /// Returns `None` if either position lies outside the filtration.
    pub fn interval<T: Copy>(&self, filtration: &Filtration<T>) -> Option<PersistenceInterval<T>> {
        let birth = filtration.value_of(self.birth)?;
        let death = match self.death {
            Some(death) => Some(filtration.value_of(death)?),
            None => None,
        };
        Some(PersistenceInterval { birth, death, dimension: self.dimension })
    }
}

/// A persistence pair expressed in filtration values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistenceInterval<T> {
    /// Filtration value of the creator.
    pub birth: T,
    /// Filtration value of the destroyer; `None` means infinity.
    pub death: Option<T>,
    /// Homological dimension.
    pub dimension: usize,
}

impl<T: PartialEq> PersistenceInterval<T> {
    /// Check if the interval extends to infinity.
    pub fn is_essential(&self) -> bool {
        self.death.is_none()
    }

    /// Check if birth and death share a filtration value.
    pub fn is_zero_persistence(&self) -> bool {
        self.death.as_ref() == Some(&self.birth)
    }
}

impl PersistenceInterval<f64> {
    /// Lifetime of the class; infinite for essential classes.
    pub fn persistence(&self) -> f64 {
        match self.death {
            Some(death) => death - self.birth,
            None => f64::INFINITY,
        }
    }
}

/// The complete set of persistence pairs of one reduction.
///
/// Pairs are kept in ascending birth order regardless of which reduction
/// variant produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistencePairing {
    pairs: Vec<PersistencePair>,
}

impl PersistencePairing {
    /// Build a pairing, sorting pairs by birth position.
    pub fn new(mut pairs: Vec<PersistencePair>) -> Self {
        pairs.sort_unstable();
        Self { pairs }
    }

    /// All pairs in ascending birth order.
    pub fn pairs(&self) -> &[PersistencePair] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over pairs in ascending birth order.
    pub fn iter(&self) -> std::slice::Iter<'_, PersistencePair> {
        self.pairs.iter()
    }

    /// Pairs whose class is never destroyed.
    pub fn essential(&self) -> impl Iterator<Item = &PersistencePair> {
        self.pairs.iter().filter(|p| p.is_essential())
    }

    /// Pairs with a finite death.
    pub fn finite(&self) -> impl Iterator<Item = &PersistencePair> {
        self.pairs.iter().filter(|p| !p.is_essential())
    }

    /// Pairs of one homological dimension.
    pub fn of_dimension(&self, dimension: usize) -> impl Iterator<Item = &PersistencePair> {
        self.pairs.iter().filter(move |p| p.dimension == dimension)
    }

    /// Find the pair created at a filtration position.
    pub fn pair_born_at(&self, birth: usize) -> Option<&PersistencePair> {
        self.pairs
            .binary_search_by_key(&birth, |p| p.birth)
            .ok()
            .map(|i| &self.pairs[i])
    }

    /// Betti numbers of the final complex: essential classes per dimension.
    ///
    /// Index `d` of the result holds the rank of homology in dimension `d`.
    /// Trailing zero dimensions are omitted.
    pub fn betti_numbers(&self) -> Vec<usize> {
        let mut betti: Vec<usize> = Vec::new();
        for pair in self.essential() {
            if betti.len() <= pair.dimension {
                betti.resize(pair.dimension + 1, 0);
            }
            betti[pair.dimension] += 1;
        }
        betti
    }

    /// Map every pair onto filtration values.
    ///
    /// Pairs referring to positions outside the filtration are skipped.
    pub fn intervals<T: Copy>(&self, filtration: &Filtration<T>) -> Vec<PersistenceInterval<T>> {
        self.pairs.iter().filter_map(|p| p.interval(filtration)).collect()
    }

    /// Deterministic fingerprint of the pairing.
    ///
    /// Identical pairings hash identically across runs, reduction variants
    /// and column representations.
    pub fn fingerprint(&self) -> Result<String, CanonicalError> {
        canonical_hash_hex(&self.pairs)
    }
}

impl<'a> IntoIterator for &'a PersistencePairing {
    type Item = &'a PersistencePair;
    type IntoIter = std::slice::Iter<'a, PersistencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
