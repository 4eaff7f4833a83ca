//! Test-only providers, solvers and fixture matrices used by unit, behaviour
//! and property tests across the workspace.
//!
//! The helpers in this module are available to unit tests and to dependent
//! crates through the `test-support` feature.

use crate::{
    CityIndex, CostMatrixError, CostMatrixProvider, DistanceMatrix, Site, SolveError, Tour,
    TourSolver,
};

/// A [`CostMatrixProvider`] returning a fixed, pre-defined matrix.
///
/// The matrix must match the number of sites passed to
/// [`CostMatrixProvider::cost_matrix`]; dimension mismatches produce a
/// [`CostMatrixError::DimensionMismatch`].
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use salesman_core::{CostMatrixProvider, Site};
/// use salesman_core::test_support::FixedMatrixProvider;
///
/// let provider = FixedMatrixProvider::from_rows(vec![vec![0.0, 60.0], vec![60.0, 0.0]]);
/// let sites = [
///     Site::new("a", Coord { x: 0.0, y: 0.0 }),
///     Site::new("b", Coord { x: 1.0, y: 0.0 }),
/// ];
/// assert!(provider.cost_matrix(&sites).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FixedMatrixProvider {
    rows: Vec<Vec<f64>>,
}

impl FixedMatrixProvider {
    /// Construct a provider from raw matrix rows.
    #[must_use]
    pub const fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }
}

impl CostMatrixProvider for FixedMatrixProvider {
    fn cost_matrix(&self, sites: &[Site]) -> Result<DistanceMatrix, CostMatrixError> {
        if sites.len() < 2 {
            return Err(CostMatrixError::InsufficientSites { count: sites.len() });
        }
        if self.rows.len() != sites.len() {
            return Err(CostMatrixError::DimensionMismatch {
                expected: sites.len(),
                actual: self.rows.len(),
            });
        }
        Ok(DistanceMatrix::new(self.rows.clone())?)
    }
}

/// Straight-line distances between site coordinates.
///
/// Distances are in coordinate units, which keeps generated matrices
/// symmetric and metric.
#[derive(Debug, Default, Copy, Clone)]
pub struct EuclideanProvider;

impl CostMatrixProvider for EuclideanProvider {
    #[expect(
        clippy::float_arithmetic,
        reason = "straight-line distance is floating-point geometry"
    )]
    fn cost_matrix(&self, sites: &[Site]) -> Result<DistanceMatrix, CostMatrixError> {
        if sites.len() < 2 {
            return Err(CostMatrixError::InsufficientSites { count: sites.len() });
        }
        Ok(DistanceMatrix::from_fn(sites.len(), |from, to| {
            match (sites.get(from), sites.get(to)) {
                (Some(a), Some(b)) => {
                    let dx = b.location.x - a.location.x;
                    let dy = b.location.y - a.location.y;
                    dx.hypot(dy)
                }
                _ => f64::INFINITY,
            }
        })?)
    }
}

/// A provider whose backing service always fails.
#[derive(Debug, Default, Copy, Clone)]
pub struct FailingProvider;

impl CostMatrixProvider for FailingProvider {
    fn cost_matrix(&self, _sites: &[Site]) -> Result<DistanceMatrix, CostMatrixError> {
        Err(CostMatrixError::Service {
            message: "routing service unavailable".to_owned(),
        })
    }
}

/// Visits cities in increasing index order, wrapping around from the start.
#[derive(Debug, Default, Copy, Clone)]
pub struct FixedOrderSolver;

impl TourSolver for FixedOrderSolver {
    fn name(&self) -> &'static str {
        "fixed-order"
    }

    fn solve(&self, matrix: &DistanceMatrix, start: CityIndex) -> Result<Tour, SolveError> {
        matrix.check_start(start)?;
        let cities = matrix.city_count();
        let mut path: Vec<CityIndex> = (start..cities).chain(0..start).collect();
        path.push(start);
        Ok(Tour::from_path(matrix, path)?)
    }
}

/// Build a matrix from rows, panicking on invalid input.
///
/// # Panics
///
/// Panics if `rows` is not a valid distance matrix.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixtures are static and a bad one should fail the test loudly"
)]
pub fn matrix(rows: Vec<Vec<f64>>) -> DistanceMatrix {
    DistanceMatrix::new(rows).expect("fixture matrix should be valid")
}

/// The smallest valid problem: two cities five units apart.
#[must_use]
pub fn two_city_matrix() -> DistanceMatrix {
    matrix(vec![vec![0.0, 5.0], vec![5.0, 0.0]])
}

/// A symmetric four-city problem whose optimal tour from city 0 costs 80.
#[must_use]
pub fn four_city_matrix() -> DistanceMatrix {
    matrix(vec![
        vec![0.0, 10.0, 15.0, 20.0],
        vec![10.0, 0.0, 35.0, 25.0],
        vec![15.0, 35.0, 0.0, 30.0],
        vec![20.0, 25.0, 30.0, 0.0],
    ])
}

/// Cheapest closed tour from `start`, found by trying every permutation.
///
/// Only practical for a handful of cities; used as an oracle for exact
/// solvers. Returns `f64::INFINITY` when `start` is out of range.
#[must_use]
pub fn brute_force_optimum(matrix: &DistanceMatrix, start: CityIndex) -> f64 {
    if matrix.check_start(start).is_err() {
        return f64::INFINITY;
    }
    let mut rest: Vec<CityIndex> = (0..matrix.city_count())
        .filter(|&city| city != start)
        .collect();
    let mut best = f64::INFINITY;
    permute(matrix, start, &mut rest, 0, &mut best);
    best
}

fn permute(
    matrix: &DistanceMatrix,
    start: CityIndex,
    rest: &mut [CityIndex],
    fixed: usize,
    best: &mut f64,
) {
    if fixed == rest.len() {
        let path: Vec<CityIndex> = std::iter::once(start)
            .chain(rest.iter().copied())
            .chain(std::iter::once(start))
            .collect();
        if let Some(cost) = matrix.path_cost(&path)
            && cost < *best
        {
            *best = cost;
        }
        return;
    }
    for next in fixed..rest.len() {
        rest.swap(fixed, next);
        permute(matrix, start, rest, fixed + 1, best);
        rest.swap(fixed, next);
    }
}
