//! Run a single-start solver from every city and keep the cheapest tour.
//!
//! Neither solver is invariant to the choice of start city on asymmetric
//! matrices, so the driver tries each one. Starts are folded in increasing
//! index order and a later tour replaces the incumbent only when it is
//! strictly cheaper, which makes tie-breaking reproducible whether the starts
//! ran sequentially or in parallel.

use crate::error::SolveError;
use crate::matrix::{CityIndex, DistanceMatrix};
use crate::solver::TourSolver;
use crate::tour::Tour;

/// Driver that solves once per start city and keeps the best result.
///
/// # Examples
/// ```
/// use salesman_core::{BestOfStarts, CityIndex, DistanceMatrix, SolveError, Tour, TourSolver};
///
/// struct InOrder;
///
/// impl TourSolver for InOrder {
///     fn name(&self) -> &'static str {
///         "in-order"
///     }
///
///     fn solve(&self, matrix: &DistanceMatrix, start: CityIndex) -> Result<Tour, SolveError> {
///         let cities = matrix.city_count();
///         let mut path: Vec<_> = (0..cities).map(|offset| (start + offset) % cities).collect();
///         path.push(start);
///         Ok(Tour::from_path(matrix, path)?)
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 9.0],
///     vec![9.0, 0.0, 1.0],
///     vec![1.0, 9.0, 0.0],
/// ])?;
/// let tour = BestOfStarts::new(InOrder).solve(&matrix)?;
/// assert_eq!(tour.total_cost(), 3.0);
/// assert_eq!(tour.start(), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BestOfStarts<S> {
    solver: S,
}

impl<S: TourSolver> BestOfStarts<S> {
    /// Wrap a single-start solver.
    #[must_use]
    pub const fn new(solver: S) -> Self {
        Self { solver }
    }

    /// The wrapped solver.
    #[must_use]
    pub const fn solver(&self) -> &S {
        &self.solver
    }

    /// Unwrap the solver.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.solver
    }

    /// Solve from each start city in turn and return the cheapest tour.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoFeasibleTour`] when every start fails with a
    /// start-specific error. Any other error aborts the driver and is returned
    /// unchanged.
    pub fn solve(&self, matrix: &DistanceMatrix) -> Result<Tour, SolveError> {
        log::debug!(
            "solving {} cities from every start with {}",
            matrix.city_count(),
            self.solver.name()
        );
        select_best(
            (0..matrix.city_count()).map(|start| (start, self.solver.solve(matrix, start))),
            matrix.city_count(),
        )
    }

    /// Solve every start concurrently and return the cheapest tour.
    ///
    /// Outcomes are folded in start order once all of them are available, so
    /// the result is identical to [`BestOfStarts::solve`].
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`BestOfStarts::solve`].
    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    pub fn solve_parallel(&self, matrix: &DistanceMatrix) -> Result<Tour, SolveError> {
        use rayon::prelude::*;

        log::debug!(
            "solving {} cities from every start in parallel with {}",
            matrix.city_count(),
            self.solver.name()
        );
        let outcomes: Vec<(CityIndex, Result<Tour, SolveError>)> = (0..matrix.city_count())
            .into_par_iter()
            .map(|start| (start, self.solver.solve(matrix, start)))
            .collect();
        select_best(outcomes, matrix.city_count())
    }
}

fn select_best<I>(outcomes: I, attempted: usize) -> Result<Tour, SolveError>
where
    I: IntoIterator<Item = (CityIndex, Result<Tour, SolveError>)>,
{
    let mut best: Option<Tour> = None;
    for (start, outcome) in outcomes {
        match outcome {
            Ok(tour) => {
                log::trace!("start {start} produced a tour costing {}", tour.total_cost());
                if best
                    .as_ref()
                    .is_none_or(|incumbent| tour.total_cost() < incumbent.total_cost())
                {
                    best = Some(tour);
                }
            }
            Err(err) if err.is_start_specific() => {
                log::warn!("skipping start city {start}: {err}");
            }
            Err(err) => return Err(err),
        }
    }
    best.ok_or(SolveError::NoFeasibleTour { attempted })
}
