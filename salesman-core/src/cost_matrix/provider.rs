//! Cost-matrix provider trait for sites.

use crate::matrix::DistanceMatrix;
use crate::site::Site;

use super::error::CostMatrixError;

/// Fetch pairwise travel costs for a set of sites.
///
/// Implementers must return a square `n×n` matrix where `n == sites.len()`.
/// `cost(i, j)` is the cost of travelling from `sites[i]` to `sites[j]`.
/// Pairs the backing service cannot route should be `f64::INFINITY` rather
/// than an error.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use salesman_core::{CostMatrixError, CostMatrixProvider, DistanceMatrix, Site};
///
/// struct UnitProvider;
///
/// impl CostMatrixProvider for UnitProvider {
///     fn cost_matrix(&self, sites: &[Site]) -> Result<DistanceMatrix, CostMatrixError> {
///         if sites.len() < 2 {
///             return Err(CostMatrixError::InsufficientSites { count: sites.len() });
///         }
///         Ok(DistanceMatrix::from_fn(sites.len(), |_, _| 1.0)?)
///     }
/// }
///
/// let sites = [
///     Site::new("depot", Coord { x: 0.0, y: 0.0 }),
///     Site::new("market", Coord { x: 1.0, y: 1.0 }),
/// ];
/// let matrix = UnitProvider.cost_matrix(&sites)?;
/// assert_eq!(matrix.city_count(), 2);
/// # Ok::<(), CostMatrixError>(())
/// ```
pub trait CostMatrixProvider {
    /// Return a matrix of travel costs for `sites`.
    ///
    /// Implementations must return `Err(CostMatrixError::InsufficientSites)`
    /// when fewer than two sites are supplied.
    ///
    /// # Errors
    ///
    /// Returns [`CostMatrixError`] when the sites are insufficient or the
    /// backing service fails.
    fn cost_matrix(&self, sites: &[Site]) -> Result<DistanceMatrix, CostMatrixError>;
}

impl<P: CostMatrixProvider + ?Sized> CostMatrixProvider for &P {
    fn cost_matrix(&self, sites: &[Site]) -> Result<DistanceMatrix, CostMatrixError> {
        (**self).cost_matrix(sites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    use crate::test_support::FixedMatrixProvider;

    fn sample_sites() -> Vec<Site> {
        vec![
            Site::new("depot", Coord { x: 0.0, y: 0.0 }),
            Site::new("market", Coord { x: 1.0, y: 1.0 }),
        ]
    }

    #[rstest]
    fn returns_square_matrix() {
        let provider = FixedMatrixProvider::from_rows(vec![vec![0.0, 4.0], vec![6.0, 0.0]]);
        let sites = sample_sites();
        let matrix = provider
            .cost_matrix(&sites)
            .expect("expected square matrix from FixedMatrixProvider");
        assert_eq!(matrix.city_count(), sites.len());
        assert_eq!(matrix.cost(0, 1), Some(4.0));
        assert_eq!(matrix.cost(1, 0), Some(6.0));
    }

    #[rstest]
    fn errors_on_single_site() {
        let provider = FixedMatrixProvider::from_rows(vec![vec![0.0, 4.0], vec![6.0, 0.0]]);
        let sites = sample_sites();
        let err = provider
            .cost_matrix(sites.get(..1).unwrap_or_default())
            .expect_err("expected InsufficientSites for one site");
        assert_eq!(err, CostMatrixError::InsufficientSites { count: 1 });
    }

    #[rstest]
    fn errors_on_dimension_mismatch() {
        let provider = FixedMatrixProvider::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ]);
        let err = provider
            .cost_matrix(&sample_sites())
            .expect_err("expected DimensionMismatch for three rows");
        assert_eq!(
            err,
            CostMatrixError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }
}
