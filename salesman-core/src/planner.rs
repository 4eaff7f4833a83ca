//! Plan a closed route through labelled sites.
//!
//! [`RoutePlanner`] composes an injected [`CostMatrixProvider`] with the
//! [`BestOfStarts`] driver: it asks the provider for costs between the sites,
//! solves from every start city and maps the winning tour back onto the
//! sites.

use thiserror::Error;

use crate::best_of_starts::BestOfStarts;
use crate::cost_matrix::{CostMatrixError, CostMatrixProvider};
use crate::error::SolveError;
use crate::site::Site;
use crate::solver::TourSolver;
use crate::tour::Tour;

/// Errors returned by [`RoutePlanner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The provider could not supply a cost matrix.
    #[error("failed to obtain cost matrix: {0}")]
    CostMatrix(#[from] CostMatrixError),
    /// No tour could be solved over the matrix.
    #[error("failed to solve tour: {0}")]
    Solve(#[from] SolveError),
}

/// A solved tour together with the sites it visits, in order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlannedRoute {
    /// Sites in visiting order; the first site is repeated at the end.
    pub stops: Vec<Site>,
    /// The underlying index tour and its cost.
    pub tour: Tour,
}

impl PlannedRoute {
    /// Total cost of the route in the provider's units.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.tour.total_cost()
    }
}

/// Plans routes by combining a cost provider with a best-of-starts solve.
///
/// The planner is generic over the engine boundaries: a cost-matrix provider
/// and a single-start tour solver.
#[derive(Debug, Clone)]
pub struct RoutePlanner<P, S> {
    provider: P,
    driver: BestOfStarts<S>,
}

impl<P, S> RoutePlanner<P, S>
where
    P: CostMatrixProvider,
    S: TourSolver,
{
    /// Construct a planner from a provider and a solver.
    #[must_use]
    pub const fn new(provider: P, solver: S) -> Self {
        Self {
            provider,
            driver: BestOfStarts::new(solver),
        }
    }

    /// Plan the cheapest closed route through `sites`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::CostMatrix`] when the provider fails or returns a
    /// matrix of the wrong size, and [`PlanError::Solve`] when no tour can be
    /// found.
    pub fn plan(&self, sites: &[Site]) -> Result<PlannedRoute, PlanError> {
        let matrix = self.provider.cost_matrix(sites)?;
        if matrix.city_count() != sites.len() {
            return Err(CostMatrixError::DimensionMismatch {
                expected: sites.len(),
                actual: matrix.city_count(),
            }
            .into());
        }
        let tour = self.driver.solve(&matrix)?;
        if !tour.is_finite() {
            log::warn!(
                "planned route through {} sites crosses an unreachable leg",
                sites.len()
            );
        }
        let stops = tour
            .labelled(sites)
            .map(|stops| stops.into_iter().cloned().collect())
            .ok_or(CostMatrixError::DimensionMismatch {
                expected: sites.len(),
                actual: matrix.city_count(),
            })?;
        log::debug!(
            "planned route through {} sites costing {}",
            sites.len(),
            tour.total_cost()
        );
        Ok(PlannedRoute { stops, tour })
    }
}
