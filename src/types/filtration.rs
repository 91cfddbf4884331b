//! Filtration input supplied by complex-construction code.
//!
//! A filtration is an ordered sequence of simplices. Position in the
//! sequence is the only identity the kernel uses: boundaries refer to
//! earlier positions, and the filtration value is carried through only so
//! that pairs can later be mapped onto intervals.

use serde::{Deserialize, Serialize};

/// One simplex of a filtration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredSimplex<T> {
    /// Simplex dimension (0 for vertices, 1 for edges, ...).
    pub dimension: usize,
    /// Filtration positions of the codimension-1 faces.
    pub boundary: Vec<usize>,
    /// Filtration value at which the simplex appears.
    pub value: T,
}

impl<T> FilteredSimplex<T> {
    /// Create a simplex from its dimension, boundary and filtration value.
    pub fn new(dimension: usize, boundary: Vec<usize>, value: T) -> Self {
        Self { dimension, boundary, value }
    }

    /// Create a vertex (empty boundary).
    pub fn vertex(value: T) -> Self {
        Self::new(0, Vec::new(), value)
    }
}

/// A totally ordered sequence of simplices.
///
/// The kernel never reorders a filtration; ties in filtration value are
/// resolved by the order in which the caller pushed simplices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filtration<T> {
    simplices: Vec<FilteredSimplex<T>>,
}

impl<T> Default for Filtration<T> {
    fn default() -> Self {
        Self { simplices: Vec::new() }
    }
}

impl<T> Filtration<T> {
    /// Create an empty filtration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a simplex and return its filtration position.
    pub fn push(&mut self, simplex: FilteredSimplex<T>) -> usize {
        self.simplices.push(simplex);
        self.simplices.len() - 1
    }

    /// Append a vertex and return its position.
    pub fn push_vertex(&mut self, value: T) -> usize {
        self.push(FilteredSimplex::vertex(value))
    }

    /// Append a simplex of dimension `boundary.len() - 1` and return its position.
    ///
    /// Convenience for simplicial boundaries; use [`Filtration::push`] for
    /// cells whose boundary size differs from `dimension + 1`.
    pub fn push_simplex(&mut self, boundary: Vec<usize>, value: T) -> usize {
        let dimension = boundary.len().saturating_sub(1);
        self.push(FilteredSimplex::new(dimension, boundary, value))
    }

    /// Number of simplices.
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    /// Check if the filtration has no simplices.
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Simplex at a filtration position.
    pub fn get(&self, index: usize) -> Option<&FilteredSimplex<T>> {
        self.simplices.get(index)
    }

    /// Dimension of the simplex at a filtration position.
    pub fn dimension_of(&self, index: usize) -> Option<usize> {
        self.simplices.get(index).map(|s| s.dimension)
    }

    /// Maximum simplex dimension, or `None` for an empty filtration.
    pub fn max_dimension(&self) -> Option<usize> {
        self.simplices.iter().map(|s| s.dimension).max()
    }

    /// Iterate over simplices in filtration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilteredSimplex<T>> {
        self.simplices.iter()
    }
}

impl<T: Copy> Filtration<T> {
    /// Filtration value of the simplex at a position.
    pub fn value_of(&self, index: usize) -> Option<T> {
        self.simplices.get(index).map(|s| s.value)
    }
}

impl<T> FromIterator<FilteredSimplex<T>> for Filtration<T> {
    fn from_iter<I: IntoIterator<Item = FilteredSimplex<T>>>(iter: I) -> Self {
        Self { simplices: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a Filtration<T> {
    type Item = &'a FilteredSimplex<T>;
    type IntoIter = std::slice::Iter<'a, FilteredSimplex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}
