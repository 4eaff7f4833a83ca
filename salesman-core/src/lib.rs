//! Core domain types for the Salesman tour engine.
//!
//! The crate defines the data contract shared by every solver: a validated
//! [`DistanceMatrix`] of travel costs, the closed [`Tour`] a solver returns,
//! and the [`TourSolver`] trait solvers implement. The [`BestOfStarts`]
//! driver runs a single-start solver from every city and keeps the cheapest
//! tour, and [`RoutePlanner`] composes the driver with an injected
//! [`CostMatrixProvider`] to plan routes through labelled [`Site`]s.
//!
//! Solvers never perform I/O. Constructors return `Result` to surface invalid
//! input early, and every failure is a typed, distinguishable error.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod best_of_starts;
mod budget;
pub mod cost_matrix;
mod error;
mod matrix;
mod planner;
mod site;
mod solver;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use best_of_starts::BestOfStarts;
pub use budget::{CancelToken, SolveBudget};
pub use cost_matrix::{CostMatrixError, CostMatrixProvider};
pub use error::{InvalidInputError, SolveError, TourError};
pub use matrix::{CityIndex, DistanceMatrix};
pub use planner::{PlanError, PlannedRoute, RoutePlanner};
pub use site::Site;
pub use solver::TourSolver;
pub use tour::Tour;
