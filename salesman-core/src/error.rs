//! Error types shared by every solver.
//!
//! Input problems are detected before any computation begins and surface as
//! [`InvalidInputError`]. Failures discovered while searching for a tour are
//! reported through [`SolveError`], which keeps the kinds distinguishable so
//! callers can decide how to present them.

use std::time::Duration;

use thiserror::Error;

use crate::CityIndex;

/// Malformed distance matrix, start index or problem size.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// Fewer than two cities were supplied, including the empty matrix.
    #[error("a tour needs at least two cities, got {cities}")]
    TooFewCities {
        /// Number of cities supplied.
        cities: usize,
    },
    /// A row length differs from the number of rows.
    #[error("row {row} has {len} entries but the matrix has {expected} rows")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Expected length, i.e. the number of rows.
        expected: usize,
    },
    /// An off-diagonal cost was negative.
    #[error("cost from city {from} to city {to} is negative ({cost})")]
    NegativeCost {
        /// Origin city.
        from: CityIndex,
        /// Destination city.
        to: CityIndex,
        /// The rejected cost.
        cost: f64,
    },
    /// An off-diagonal cost was NaN.
    #[error("cost from city {from} to city {to} is not a number")]
    NotANumber {
        /// Origin city.
        from: CityIndex,
        /// Destination city.
        to: CityIndex,
    },
    /// The start index does not name a city in the matrix.
    #[error("start city {start} is out of range for {cities} cities")]
    StartOutOfRange {
        /// Requested start city.
        start: CityIndex,
        /// Number of cities in the matrix.
        cities: usize,
    },
    /// The problem exceeds a solver's scaling boundary.
    #[error("{cities} cities exceed the solver limit of {limit}")]
    TooManyCities {
        /// Number of cities supplied.
        cities: usize,
        /// Largest problem the solver accepts.
        limit: usize,
    },
}

/// A city sequence that does not form a closed tour over the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// Fewer than three entries cannot describe a closed tour.
    #[error("a closed tour needs at least three entries, got {len}")]
    TooShort {
        /// Length of the rejected path.
        len: usize,
    },
    /// The first and last entries differ.
    #[error("tour starts at city {first} but ends at city {last}")]
    NotClosed {
        /// First city of the path.
        first: CityIndex,
        /// Last city of the path.
        last: CityIndex,
    },
    /// The path does not have exactly `N + 1` entries.
    #[error("tour has {actual} entries, expected {expected}")]
    WrongLength {
        /// Expected length, `N + 1`.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// A path entry is not a valid city index.
    #[error("city {city} is out of range for {cities} cities")]
    CityOutOfRange {
        /// Offending index.
        city: CityIndex,
        /// Number of cities in the matrix.
        cities: usize,
    },
    /// A city appears more than once before the closing entry.
    #[error("city {city} is visited more than once")]
    DuplicateCity {
        /// The repeated city.
        city: CityIndex,
    },
}

/// Errors returned by [`TourSolver::solve`](crate::TourSolver::solve) and the
/// [`BestOfStarts`](crate::BestOfStarts) driver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The matrix, start index or problem size was rejected up front.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    /// Greedy extension reached a city with no eligible unvisited neighbour.
    #[error(
        "city {from} has no reachable unvisited neighbour after visiting {visited} of {cities} cities"
    )]
    UnreachableCity {
        /// City the search was stuck at.
        from: CityIndex,
        /// Number of cities visited so far, including the start.
        visited: usize,
        /// Number of cities in the matrix.
        cities: usize,
    },
    /// Every candidate start city failed.
    #[error("no start city produced a feasible tour ({attempted} attempted)")]
    NoFeasibleTour {
        /// Number of start cities tried.
        attempted: usize,
    },
    /// Every tour from this start crosses an unreachable edge.
    #[error("no finite-cost tour exists from start city {start}")]
    NoFiniteTour {
        /// Start city of the failed solve.
        start: CityIndex,
    },
    /// The caller cancelled the solve.
    #[error("solve cancelled before completion")]
    Cancelled,
    /// The solve ran past its time limit.
    #[error("solve exceeded its time limit of {limit:?}")]
    TimedOut {
        /// The configured limit.
        limit: Duration,
    },
    /// The memo table could not be allocated.
    #[error("memo table for {cities} cities could not be allocated")]
    MemoTableTooLarge {
        /// Number of cities in the rejected problem.
        cities: usize,
    },
    /// A solver produced a path that is not a closed tour.
    #[error("solver produced a malformed tour: {0}")]
    MalformedTour(#[from] TourError),
}

impl SolveError {
    /// Whether the failure belongs to one start city rather than the problem.
    ///
    /// The [`BestOfStarts`](crate::BestOfStarts) driver skips start-specific
    /// failures and aborts on everything else.
    ///
    /// # Examples
    /// ```
    /// use salesman_core::SolveError;
    ///
    /// assert!(SolveError::NoFiniteTour { start: 0 }.is_start_specific());
    /// assert!(!SolveError::Cancelled.is_start_specific());
    /// ```
    #[must_use]
    pub const fn is_start_specific(&self) -> bool {
        matches!(self, Self::UnreachableCity { .. } | Self::NoFiniteTour { .. })
    }
}
