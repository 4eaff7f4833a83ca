//! Nearest-neighbour tour heuristic for Salesman.
//!
//! [`NearestNeighbourSolver`] grows a tour from the start city by always
//! moving to the closest unvisited city. It runs in `O(N^2)` time and is
//! deterministic, but carries no optimality guarantee; pair it with
//! [`BestOfStarts`](salesman_core::BestOfStarts) to try every start.

#![forbid(unsafe_code)]

mod solver;

pub use solver::NearestNeighbourSolver;
