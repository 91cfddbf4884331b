//! Index types for matrix rows and columns.
//!
//! Every column representation is generic over the integer type used to
//! store its row indices. Narrow types save memory on large complexes but
//! bound the number of simplices a matrix can hold; conversions therefore
//! go through [`ColumnIndex::from_usize`] and surface overflow as an error
//! rather than truncating.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An unsigned integer type usable as a row/column index.
pub trait ColumnIndex:
    Copy + Ord + Eq + Hash + Debug + Display + Default + Send + Sync + 'static
{
    /// Largest position representable by this index type.
    const MAX: usize;

    /// Convert a position into this index type, or `None` if it does not fit.
    fn from_usize(value: usize) -> Option<Self>;

    /// Widen this index back into a position.
    fn to_usize(self) -> usize;
}

macro_rules! impl_column_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ColumnIndex for $ty {
                const MAX: usize = if (<$ty>::MAX as u128) < (usize::MAX as u128) {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                #[inline]
                fn from_usize(value: usize) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_column_index!(u8, u16, u32, u64, usize);
