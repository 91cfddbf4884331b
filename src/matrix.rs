//! Boundary matrix over GF(2).
//!
//! Columns are dense-indexed by filtration position and sparse-valued:
//! memory is proportional to the number of boundary entries, not `n²`.
//! Column `j` may only reference rows `i < j` of dimension one lower;
//! construction enforces this and rejects duplicate faces so that malformed
//! filtrations fail fast instead of producing meaningless pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::representation::Representation;
use crate::types::{ColumnIndex, Filtration};

/// Error type for boundary matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// A column references a row that does not precede it.
    #[error("Precondition violated: column {column} references row {row}, which does not precede it")]
    FaceNotEarlier {
        /// Offending column.
        column: usize,
        /// Offending row.
        row: usize,
    },
    /// A face appears more than once in one boundary.
    #[error("Precondition violated: column {column} lists face {row} more than once")]
    DuplicateFace {
        /// Offending column.
        column: usize,
        /// Repeated row.
        row: usize,
    },
    /// A face is not exactly one dimension below its column.
    #[error("Precondition violated: column {column} of dimension {dimension} has face {row} of dimension {face_dimension}")]
    DimensionMismatch {
        /// Offending column.
        column: usize,
        /// Offending row.
        row: usize,
        /// Declared dimension of the column.
        dimension: usize,
        /// Declared dimension of the face.
        face_dimension: usize,
    },
    /// A position does not fit into the representation's index type.
    #[error("Capacity exceeded: index {value} does not fit the column index type (max {max})")]
    CapacityExceeded {
        /// Position that failed to convert.
        value: usize,
        /// Largest representable position.
        max: usize,
    },
    /// Snapshot dimensions and columns disagree in length.
    #[error("Malformed snapshot: {columns} columns but {dimensions} dimensions")]
    SnapshotLengthMismatch {
        /// Number of columns.
        columns: usize,
        /// Number of dimensions.
        dimensions: usize,
    },
}

impl MatrixError {
    /// Check if this error is a caller precondition violation rather than a
    /// capacity limit.
    pub fn is_precondition_violation(&self) -> bool {
        !matches!(self, Self::CapacityExceeded { .. })
    }
}

/// Lifecycle of a matrix with respect to reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionState {
    /// Columns hold the original boundaries.
    #[default]
    Unreduced,
    /// A reduction is in progress; column lows are not yet unique.
    Reducing,
    /// Every nonempty column has a unique low.
    Reduced,
}

/// Serializable export of a boundary matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    /// Whether the matrix is the anti-transpose of a boundary matrix.
    pub dualized: bool,
    /// Top simplex dimension of the primal complex.
    pub top_dimension: usize,
    /// Per-column dimensions.
    pub dimensions: Vec<usize>,
    /// Per-column ascending row indices.
    pub columns: Vec<Vec<usize>>,
    /// Reduction state at export time.
    pub state: ReductionState,
}

/// Boundary matrix of a filtration.
#[derive(Debug, Clone)]
pub struct BoundaryMatrix<R: Representation> {
    columns: Vec<R>,
    dimensions: Vec<usize>,
    /// Top dimension of the primal complex; fixed across dualization.
    top_dimension: usize,
    dualized: bool,
    state: ReductionState,
}

impl<R: Representation> Default for BoundaryMatrix<R> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            dimensions: Vec::new(),
            top_dimension: 0,
            dualized: false,
            state: ReductionState::Unreduced,
        }
    }
}

impl<R: Representation> BoundaryMatrix<R> {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the boundary matrix of a filtration.
    ///
    /// Boundaries are taken verbatim from the caller; they are never
    /// recomputed.
    pub fn from_filtration<T>(filtration: &Filtration<T>) -> Result<Self, MatrixError> {
        let mut matrix = Self::with_capacity(filtration.len());
        for simplex in filtration {
            matrix.push_column(simplex.dimension, &simplex.boundary)?;
        }
        Ok(matrix)
    }

    /// Build a matrix from `(dimension, boundary)` columns.
    pub fn from_boundaries<'a, I>(columns: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = (usize, &'a [usize])>,
    {
        let mut matrix = Self::new();
        for (dimension, boundary) in columns {
            matrix.push_column(dimension, boundary)?;
        }
        Ok(matrix)
    }

    /// Rebuild a matrix from an exported snapshot.
    pub fn from_snapshot(snapshot: &MatrixSnapshot) -> Result<Self, MatrixError> {
        if snapshot.columns.len() != snapshot.dimensions.len() {
            return Err(MatrixError::SnapshotLengthMismatch {
                columns: snapshot.columns.len(),
                dimensions: snapshot.dimensions.len(),
            });
        }
        let mut matrix = Self::from_boundaries(
            snapshot
                .dimensions
                .iter()
                .copied()
                .zip(snapshot.columns.iter().map(Vec::as_slice)),
        )?;
        matrix.dualized = snapshot.dualized;
        matrix.top_dimension = snapshot.top_dimension.max(matrix.top_dimension);
        matrix.state = snapshot.state;
        Ok(matrix)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
            dimensions: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Append a column and return its position.
    ///
    /// The boundary may be given in any order; it is stored ascending.
    pub fn push_column(&mut self, dimension: usize, boundary: &[usize]) -> Result<usize, MatrixError> {
        let column = self.columns.len();
        to_index::<R::Index>(column)?;

        let mut rows = boundary.to_vec();
        rows.sort_unstable();

        let mut entries: Vec<R::Index> = Vec::with_capacity(rows.len());
        for (k, &row) in rows.iter().enumerate() {
            if row >= column {
                tracing::warn!(column, row, "boundary references a row that does not precede its column");
                return Err(MatrixError::FaceNotEarlier { column, row });
            }
            if k > 0 && rows[k - 1] == row {
                tracing::warn!(column, row, "boundary lists a face twice");
                return Err(MatrixError::DuplicateFace { column, row });
            }
            let face_dimension = self.dimensions[row];
            if face_dimension + 1 != dimension {
                tracing::warn!(column, row, dimension, face_dimension, "face is not one dimension below its column");
                return Err(MatrixError::DimensionMismatch { column, row, dimension, face_dimension });
            }
            entries.push(to_index::<R::Index>(row)?);
        }

        self.columns.push(R::from_entries(&entries));
        self.dimensions.push(dimension);
        self.top_dimension = self.top_dimension.max(dimension);
        self.state = ReductionState::Unreduced;
        Ok(column)
    }

    /// Number of columns (= number of simplices).
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Check if the matrix has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column at a position.
    ///
    /// # Panics
    /// Panics if `j >= self.size()`.
    pub fn column(&self, j: usize) -> &R {
        &self.columns[j]
    }

    /// Iterate over columns in position order.
    pub fn columns(&self) -> std::slice::Iter<'_, R> {
        self.columns.iter()
    }

    /// Largest row index of a column, as a position.
    pub fn low(&self, j: usize) -> Option<usize> {
        self.columns[j].low().map(ColumnIndex::to_usize)
    }

    /// Dimension attached to a column.
    pub fn dimension_of(&self, j: usize) -> usize {
        self.dimensions[j]
    }

    /// Maximum column dimension (0 for an empty matrix).
    pub fn dimension(&self) -> usize {
        self.dimensions.iter().copied().max().unwrap_or(0)
    }

    /// Top dimension of the primal complex this matrix was built from.
    pub fn top_dimension(&self) -> usize {
        self.top_dimension
    }

    /// Check if this matrix is the anti-transpose of a boundary matrix.
    pub fn is_dualized(&self) -> bool {
        self.dualized
    }

    /// Current reduction state.
    pub fn state(&self) -> ReductionState {
        self.state
    }

    /// Total number of stored entries across all columns.
    pub fn num_entries(&self) -> usize {
        self.columns.iter().map(Representation::len).sum()
    }

    /// Check if no two nonempty columns share a low index.
    pub fn has_unique_lows(&self) -> bool {
        let mut seen = vec![false; self.size()];
        for column in &self.columns {
            if let Some(low) = column.low() {
                let low = low.to_usize();
                if seen[low] {
                    return false;
                }
                seen[low] = true;
            }
        }
        true
    }

    /// Map a column position of this matrix onto the primal filtration.
    pub fn primal_index(&self, j: usize) -> usize {
        if self.dualized {
            self.size() - 1 - j
        } else {
            j
        }
    }

    /// Dimension of the simplex at a primal filtration position.
    pub fn primal_dimension(&self, index: usize) -> usize {
        if self.dualized {
            self.top_dimension - self.dimensions[self.size() - 1 - index]
        } else {
            self.dimensions[index]
        }
    }

    /// Anti-transpose of this matrix (the coboundary matrix).
    ///
    /// Column `j'` of the result holds row `n-1-j` for every column `j`
    /// containing row `n-1-j'`; its dimension is `top - dim(n-1-j')`.
    /// Reducing the result computes persistent cohomology, whose pairs map
    /// back onto the same persistence pairs. Intended for unreduced
    /// matrices.
    pub fn dualized(&self) -> Self {
        let n = self.size();
        let mut rows: Vec<Vec<R::Index>> = vec![Vec::new(); n];

        // Rows arrive in descending order because j ascends.
        for (j, column) in self.columns.iter().enumerate() {
            let dual_row = n - 1 - j;
            for i in column.iter() {
                let dual_column = n - 1 - i.to_usize();
                // dual_row < dual_column because i < j.
                if let Some(index) = R::Index::from_usize(dual_row) {
                    rows[dual_column].push(index);
                }
            }
        }

        let columns = rows
            .into_iter()
            .map(|mut entries| {
                entries.reverse();
                R::from_entries(&entries)
            })
            .collect();

        let dimensions = (0..n)
            .map(|j| self.top_dimension - self.dimensions[n - 1 - j])
            .collect();

        Self {
            columns,
            dimensions,
            top_dimension: self.top_dimension,
            dualized: !self.dualized,
            state: ReductionState::Unreduced,
        }
    }

    /// Export columns and metadata.
    pub fn snapshot(&self) -> MatrixSnapshot {
        MatrixSnapshot {
            dualized: self.dualized,
            top_dimension: self.top_dimension,
            dimensions: self.dimensions.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| c.iter().map(ColumnIndex::to_usize).collect())
                .collect(),
            state: self.state,
        }
    }

    /// Add column `source` into column `target` (GF(2)).
    pub(crate) fn add_column(&mut self, source: usize, target: usize) {
        debug_assert_ne!(source, target, "adding a column to itself clears it");
        if source < target {
            let (head, tail) = self.columns.split_at_mut(target);
            tail[0].add(&head[source]);
        } else {
            let (head, tail) = self.columns.split_at_mut(source);
            head[target].add(&tail[0]);
        }
    }

    /// Remove every entry of a column.
    pub(crate) fn clear_column(&mut self, j: usize) {
        self.columns[j].clear();
    }

    pub(crate) fn set_state(&mut self, state: ReductionState) {
        self.state = state;
    }
}

impl<R: Representation> fmt::Display for BoundaryMatrix<R> {
    /// One line per column: `dimension: row row ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (column, dimension) in self.columns.iter().zip(&self.dimensions) {
            write!(f, "{dimension}:")?;
            for row in column.iter() {
                write!(f, " {row}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn to_index<I: ColumnIndex>(value: usize) -> Result<I, MatrixError> {
    I::from_usize(value).ok_or_else(|| {
        tracing::warn!(value, max = I::MAX, "position exceeds column index capacity");
        MatrixError::CapacityExceeded { value, max: I::MAX }
    })
}
