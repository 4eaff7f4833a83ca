//! Facade crate for the Salesman tour engine.
//!
//! This crate re-exports the core domain types and exposes the exact and
//! nearest-neighbour solvers behind the `solver-exact` and `solver-greedy`
//! feature flags. The free functions take raw matrix rows, for callers that
//! build costs elsewhere and only want an ordered path and its cost back.
//!
//! # Examples
//! ```
//! # fn main() -> Result<(), salesman::SolveError> {
//! let rows = vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ];
//! let (path, cost) = salesman::exact_tsp(rows, 0)?;
//! assert_eq!(path, [0, 1, 3, 2, 0]);
//! assert_eq!(cost, 80.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use salesman_core::{
    BestOfStarts, CancelToken, CityIndex, CostMatrixError, CostMatrixProvider, DistanceMatrix,
    InvalidInputError, PlanError, PlannedRoute, RoutePlanner, Site, SolveBudget, SolveError, Tour,
    TourError, TourSolver,
};

#[cfg(feature = "test-support")]
pub use salesman_core::test_support;

#[cfg(feature = "solver-exact")]
pub use salesman_solver_exact::{HARD_CITY_LIMIT, HeldKarpConfig, HeldKarpSolver};

#[cfg(feature = "solver-greedy")]
pub use salesman_solver_greedy::NearestNeighbourSolver;

/// Solver selected at runtime, for example from a request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// Held-Karp dynamic programming with default configuration.
    #[cfg(feature = "solver-exact")]
    Exact,
    /// Greedy nearest-neighbour tours.
    #[cfg(feature = "solver-greedy")]
    NearestNeighbour,
}

impl Algorithm {
    /// A boxed solver implementing this algorithm.
    #[must_use]
    pub fn solver(self) -> Box<dyn TourSolver> {
        match self {
            #[cfg(feature = "solver-exact")]
            Self::Exact => Box::new(HeldKarpSolver::new()),
            #[cfg(feature = "solver-greedy")]
            Self::NearestNeighbour => Box::new(NearestNeighbourSolver::new()),
        }
    }
}

/// Exact minimal tour from `start` over raw matrix rows.
///
/// Returns the closed path, starting and ending at `start`, with its cost.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] for a malformed matrix, a bad start or
/// too many cities, and [`SolveError::NoFiniteTour`] when every tour crosses
/// an unreachable edge.
#[cfg(feature = "solver-exact")]
#[cfg_attr(docsrs, doc(cfg(feature = "solver-exact")))]
pub fn exact_tsp(
    rows: Vec<Vec<f64>>,
    start: CityIndex,
) -> Result<(Vec<CityIndex>, f64), SolveError> {
    solve_rows(&HeldKarpSolver::new(), rows, start)
}

/// Greedy nearest-neighbour tour from `start` over raw matrix rows.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] for a malformed matrix or bad start,
/// [`SolveError::UnreachableCity`] when the greedy walk gets stuck, and
/// [`SolveError::NoFiniteTour`] when the last city cannot return.
#[cfg(feature = "solver-greedy")]
#[cfg_attr(docsrs, doc(cfg(feature = "solver-greedy")))]
pub fn nearest_neighbour_tsp(
    rows: Vec<Vec<f64>>,
    start: CityIndex,
) -> Result<(Vec<CityIndex>, f64), SolveError> {
    solve_rows(&NearestNeighbourSolver::new(), rows, start)
}

/// Run `algorithm` from every start city and return the cheapest tour.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] for a malformed matrix,
/// [`SolveError::NoFeasibleTour`] when no start city yields a tour, and any
/// error that aborts the [`BestOfStarts`] driver.
pub fn solve_best(rows: Vec<Vec<f64>>, algorithm: Algorithm) -> Result<Tour, SolveError> {
    let matrix = DistanceMatrix::new(rows)?;
    BestOfStarts::new(algorithm.solver()).solve(&matrix)
}

#[cfg(any(feature = "solver-exact", feature = "solver-greedy"))]
fn solve_rows<S: TourSolver>(
    solver: &S,
    rows: Vec<Vec<f64>>,
    start: CityIndex,
) -> Result<(Vec<CityIndex>, f64), SolveError> {
    let matrix = DistanceMatrix::new(rows)?;
    Ok(solver.solve(&matrix, start)?.into_parts())
}
