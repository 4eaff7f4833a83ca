use crate::error::SolveError;
use crate::matrix::{CityIndex, DistanceMatrix};
use crate::tour::Tour;

/// Find a closed tour over a distance matrix from a fixed start city.
///
/// Implementations are pure with respect to their inputs: the matrix is only
/// read, and all working state is allocated per call. They should return
/// [`SolveError::InvalidInput`] for a bad start index rather than panicking.
/// Solvers must be `Send + Sync` so independent starts can run on separate
/// threads.
///
/// # Examples
/// ```
/// use salesman_core::{CityIndex, DistanceMatrix, SolveError, Tour, TourSolver};
///
/// /// Visits cities in index order after the start.
/// struct InOrder;
///
/// impl TourSolver for InOrder {
///     fn name(&self) -> &'static str {
///         "in-order"
///     }
///
///     fn solve(&self, matrix: &DistanceMatrix, start: CityIndex) -> Result<Tour, SolveError> {
///         matrix.check_start(start)?;
///         let cities = matrix.city_count();
///         let mut path: Vec<_> = (0..cities).map(|offset| (start + offset) % cities).collect();
///         path.push(start);
///         Ok(Tour::from_path(matrix, path)?)
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let matrix = DistanceMatrix::from_fn(3, |_, _| 1.0)?;
/// let tour = InOrder.solve(&matrix, 1)?;
/// assert_eq!(tour.path(), &[1, 2, 0, 1]);
/// # Ok(())
/// # }
/// ```
pub trait TourSolver: Send + Sync {
    /// Short, stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Solve from `start`, producing a closed tour or an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] when the input is invalid or no tour can be
    /// produced from `start`.
    fn solve(&self, matrix: &DistanceMatrix, start: CityIndex) -> Result<Tour, SolveError>;
}

impl<S: TourSolver + ?Sized> TourSolver for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, matrix: &DistanceMatrix, start: CityIndex) -> Result<Tour, SolveError> {
        (**self).solve(matrix, start)
    }
}

impl<S: TourSolver + ?Sized> TourSolver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, matrix: &DistanceMatrix, start: CityIndex) -> Result<Tour, SolveError> {
        (**self).solve(matrix, start)
    }
}
