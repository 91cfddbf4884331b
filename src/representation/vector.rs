//! Sorted dynamic-array column.

use super::{merge_symmetric_difference, Representation, RepresentationKind};
use crate::types::ColumnIndex;

/// Column stored as a strictly ascending `Vec`.
///
/// The low entry is the last element, and addition is a linear merge into
/// a reusable scratch buffer.
#[derive(Debug, Clone, Default)]
pub struct VectorColumn<I: ColumnIndex = u32> {
    entries: Vec<I>,
    /// Holds the previous entries after an addition; contents are garbage.
    scratch: Vec<I>,
}

impl<I: ColumnIndex> VectorColumn<I> {
    /// Create an empty column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[I] {
        &self.entries
    }
}

impl<I: ColumnIndex> Representation for VectorColumn<I> {
    type Index = I;
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, I>>;

    const KIND: RepresentationKind = RepresentationKind::Vector;

    fn assign(&mut self, entries: &[I]) {
        debug_assert!(entries.windows(2).all(|w| w[0] < w[1]), "entries must be strictly ascending");
        self.entries.clear();
        self.entries.extend_from_slice(entries);
    }

    fn add(&mut self, other: &Self) {
        if other.entries.is_empty() {
            return;
        }
        let scratch = &mut self.scratch;
        scratch.clear();
        scratch.reserve(self.entries.len() + other.entries.len());
        merge_symmetric_difference(
            self.entries.iter().copied(),
            other.entries.iter().copied(),
            |i| scratch.push(i),
        );
        std::mem::swap(&mut self.entries, &mut self.scratch);
    }

    fn low(&self) -> Option<I> {
        self.entries.last().copied()
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

impl<I: ColumnIndex> PartialEq for VectorColumn<I> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<I: ColumnIndex> Eq for VectorColumn<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_cancels_shared_entries() {
        let mut column = VectorColumn::<u32>::from_entries(&[0, 1]);
        column.add(&VectorColumn::from_entries(&[1, 2]));
        assert_eq!(column.as_slice(), &[0, 2]);
        assert_eq!(column.low(), Some(2));
    }

    #[test]
    fn test_add_self_empties() {
        let mut column = VectorColumn::<u16>::from_entries(&[3, 4, 9]);
        let copy = column.clone();
        column.add(&copy);
        assert!(column.is_empty());
        assert_eq!(column.low(), None);
    }

    #[test]
    fn test_repeated_adds_reuse_scratch() {
        let mut column = VectorColumn::<u32>::from_entries(&[0, 4, 8]);
        let other = VectorColumn::from_entries(&[1, 4, 9]);

        column.add(&other);
        assert_eq!(column.as_slice(), &[0, 1, 8, 9]);
        // The displaced buffer is kept but never observable.
        assert_eq!(column, VectorColumn::from_entries(&[0, 1, 8, 9]));

        column.add(&other);
        assert_eq!(column, VectorColumn::from_entries(&[0, 4, 8]));
        assert!(column.scratch.capacity() >= 3);
    }
}
