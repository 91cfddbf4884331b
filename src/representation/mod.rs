//! Column representations.
//!
//! A column stores the set of row indices with a nonzero entry in one
//! boundary-matrix column over GF(2). Several strategies trade insertion
//! cost against query cost; all of them must agree exactly on `low()` and
//! `is_empty()` for the same sequence of additions.
//!
//! | Strategy | `add` | `low` | Notes |
//! |----------|-------|-------|-------|
//! | [`VectorColumn`] | O(a + b) merge | O(1) | default |
//! | [`SetColumn`] | O(b log a) | O(log a) | balanced tree |
//! | [`ListColumn`] | O(a + b) merge | O(1) | linked list |
//! | [`HashColumn`] | O(b) expected | O(a) scan | unordered |

pub mod vector;
pub mod set;
pub mod list;
pub mod hash;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::types::ColumnIndex;

/// Trait for column storage strategies.
///
/// Implementations must keep entries unique. `low()` follows the reduction
/// convention: it is the *largest* row index present.
pub trait Representation: Default + Clone + Debug + Send + Sync {
    /// Integer type of the stored row indices.
    type Index: ColumnIndex;

    /// Ascending iterator over entries.
    type Iter<'a>: Iterator<Item = Self::Index>
    where
        Self: 'a;

    /// Strategy this type implements.
    const KIND: RepresentationKind;

    /// Replace the content with the given strictly ascending entries.
    fn assign(&mut self, entries: &[Self::Index]);

    /// Replace the column with the symmetric difference of itself and `other`.
    fn add(&mut self, other: &Self);

    /// Largest row index present, or `None` for an empty column.
    fn low(&self) -> Option<Self::Index>;

    /// Check if the column has no entries.
    fn is_empty(&self) -> bool;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Remove every entry.
    fn clear(&mut self);

    /// Iterate over entries in ascending order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Entries collected into an ascending vector.
    fn entries(&self) -> Vec<Self::Index> {
        self.iter().collect()
    }

    /// Build a column from strictly ascending entries.
    fn from_entries(entries: &[Self::Index]) -> Self {
        let mut column = Self::default();
        column.assign(entries);
        column
    }
}

/// Runtime name of a column representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationKind {
    /// Sorted dynamic array.
    #[default]
    Vector,
    /// Balanced search tree.
    Set,
    /// Sorted linked list.
    List,
    /// Hash set.
    Hash,
}

impl RepresentationKind {
    /// All strategies, in declaration order.
    pub const ALL: [RepresentationKind; 4] = [Self::Vector, Self::Set, Self::List, Self::Hash];

    /// Stable identifier used in logs and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Set => "set",
            Self::List => "list",
            Self::Hash => "hash",
        }
    }
}

impl std::fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge two strictly ascending sequences into their symmetric difference.
///
/// Shared by the merge-based representations.
pub(crate) fn merge_symmetric_difference<I, A, B, F>(mut a: A, mut b: B, mut emit: F)
where
    I: Ord,
    A: Iterator<Item = I>,
    B: Iterator<Item = I>,
    F: FnMut(I),
{
    let mut x = a.next();
    let mut y = b.next();
    loop {
        match (x, y) {
            (Some(lhs), Some(rhs)) => match lhs.cmp(&rhs) {
                std::cmp::Ordering::Less => {
                    emit(lhs);
                    x = a.next();
                    y = Some(rhs);
                }
                std::cmp::Ordering::Greater => {
                    emit(rhs);
                    x = Some(lhs);
                    y = b.next();
                }
                std::cmp::Ordering::Equal => {
                    x = a.next();
                    y = b.next();
                }
            },
            (Some(lhs), None) => {
                emit(lhs);
                a.for_each(&mut emit);
                return;
            }
            (None, Some(rhs)) => {
                emit(rhs);
                b.for_each(&mut emit);
                return;
            }
            (None, None) => return,
        }
    }
}

pub use hash::HashColumn;
pub use list::ListColumn;
pub use set::SetColumn;
pub use vector::VectorColumn;
