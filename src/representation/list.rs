//! Linked-list column.

use std::collections::LinkedList;

use super::{merge_symmetric_difference, Representation, RepresentationKind};
use crate::types::ColumnIndex;

/// Column stored as a strictly ascending `LinkedList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListColumn<I: ColumnIndex = u32> {
    entries: LinkedList<I>,
}

impl<I: ColumnIndex> ListColumn<I> {
    /// Create an empty column.
    pub fn new() -> Self {
        Self { entries: LinkedList::new() }
    }
}

impl<I: ColumnIndex> Representation for ListColumn<I> {
    type Index = I;
    type Iter<'a> = std::iter::Copied<std::collections::linked_list::Iter<'a, I>>;

    const KIND: RepresentationKind = RepresentationKind::List;

    fn assign(&mut self, entries: &[I]) {
        debug_assert!(entries.windows(2).all(|w| w[0] < w[1]), "entries must be strictly ascending");
        self.entries = entries.iter().copied().collect();
    }

    fn add(&mut self, other: &Self) {
        let current = std::mem::take(&mut self.entries);
        let entries = &mut self.entries;
        merge_symmetric_difference(current.into_iter(), other.entries.iter().copied(), |i| {
            entries.push_back(i)
        });
    }

    fn low(&self) -> Option<I> {
        self.entries.back().copied()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.entries.iter().copied()
    }
}
