//! Balanced-tree column.

use std::collections::BTreeSet;

use super::{Representation, RepresentationKind};
use crate::types::ColumnIndex;

/// Column stored in a `BTreeSet`.
///
/// Addition toggles each entry of the other column, so it is cheap when the
/// added column is short relative to this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetColumn<I: ColumnIndex = u32> {
    rows: BTreeSet<I>,
}

impl<I: ColumnIndex> SetColumn<I> {
    /// Create an empty column.
    pub fn new() -> Self {
        Self { rows: BTreeSet::new() }
    }
}

impl<I: ColumnIndex> Representation for SetColumn<I> {
    type Index = I;
    type Iter<'a> = std::iter::Copied<std::collections::btree_set::Iter<'a, I>>;

    const KIND: RepresentationKind = RepresentationKind::Set;

    fn assign(&mut self, entries: &[I]) {
        self.rows = entries.iter().copied().collect();
    }

    fn add(&mut self, other: &Self) {
        for &row in &other.rows {
            if !self.rows.remove(&row) {
                self.rows.insert(row);
            }
        }
    }

    fn low(&self) -> Option<I> {
        self.rows.iter().next_back().copied()
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
        self.rows.iter().copied()
    }
}
