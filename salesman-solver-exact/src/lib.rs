//! Exact tour solver for Salesman based on Held-Karp dynamic programming.
//!
//! [`HeldKarpSolver`] implements [`TourSolver`](salesman_core::TourSolver) and
//! returns a provably minimal closed tour from a fixed start city. Work and
//! memory grow as `O(2^N * N^2)` and `O(2^N * N)` respectively, so the solver
//! refuses problems above a configurable city limit with
//! [`InvalidInputError::TooManyCities`](salesman_core::InvalidInputError) and
//! honours an optional time limit and cancellation token.
//!
//! # Examples
//! ```
//! use salesman_core::{DistanceMatrix, TourSolver};
//! use salesman_solver_exact::HeldKarpSolver;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])?;
//! let tour = HeldKarpSolver::new().solve(&matrix, 0)?;
//! assert_eq!(tour.total_cost(), 80.0);
//! assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod memo;
mod solver;
mod subsets;

pub use solver::{HARD_CITY_LIMIT, HeldKarpConfig, HeldKarpSolver};
