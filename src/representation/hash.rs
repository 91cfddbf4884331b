//! Hash-set column.

use std::collections::HashSet;

use super::{Representation, RepresentationKind};
use crate::types::ColumnIndex;

/// Column stored in a `HashSet`.
///
/// Toggling is expected O(1) per entry; `low()` scans every entry and
/// ascending iteration sorts a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashColumn<I: ColumnIndex = u32> {
    rows: HashSet<I>,
}

impl<I: ColumnIndex> HashColumn<I> {
    /// Create an empty column.
    pub fn new() -> Self {
        Self { rows: HashSet::new() }
    }
}

impl<I: ColumnIndex> Representation for HashColumn<I> {
    type Index = I;
    type Iter<'a> = std::vec::IntoIter<I>;

    const KIND: RepresentationKind = RepresentationKind::Hash;

    fn assign(&mut self, entries: &[I]) {
        self.rows.clear();
        self.rows.extend(entries.iter().copied());
    }

    fn add(&mut self, other: &Self) {
        for &row in &other.rows {
            if !self.rows.remove(&row) {
                self.rows.insert(row);
            }
        }
    }

    fn low(&self) -> Option<I> {
        self.rows.iter().max().copied()
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn clear(&mut self) {
        self.rows.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        let mut sorted: Vec<I> = self.rows.iter().copied().collect();
        sorted.sort_unstable();
        sorted.into_iter()
    }
}
