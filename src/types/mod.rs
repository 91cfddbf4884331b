//! Core value types for the homology kernel.

pub mod index;
pub mod filtration;
pub mod pair;

pub use index::ColumnIndex;
pub use filtration::{FilteredSimplex, Filtration};
pub use pair::{PersistencePair, PersistencePairing, PersistenceInterval};
