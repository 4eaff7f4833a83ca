use thiserror::Error;

use crate::error::InvalidInputError;

/// Errors from [`crate::cost_matrix::CostMatrixProvider::cost_matrix`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostMatrixError {
    /// Fewer than two sites were provided.
    ///
    /// A tour needs at least two stops. Callers should drop sites they could
    /// not locate before asking for a matrix and report this condition when
    /// too few remain.
    #[error("at least two sites are required, got {count}")]
    InsufficientSites {
        /// Number of sites supplied.
        count: usize,
    },
    /// The provider returned a matrix of the wrong size.
    #[error("expected a {expected}x{expected} matrix, got {actual} rows")]
    DimensionMismatch {
        /// Number of sites requested.
        expected: usize,
        /// Number of rows returned.
        actual: usize,
    },
    /// The backing service reported a failure.
    #[error("cost matrix service failed: {message}")]
    Service {
        /// Provider-specific description.
        message: String,
    },
    /// The returned costs failed matrix validation.
    #[error(transparent)]
    InvalidMatrix(#[from] InvalidInputError),
}
