//! Obtain pairwise travel costs for a set of sites.
//!
//! The `CostMatrixProvider` trait is the seam through which callers inject
//! real-world distances, typically from a routing service. The core never
//! talks to such a service itself: callers supply a slice of
//! [`Site`](crate::Site) values and receive a validated
//! [`DistanceMatrix`](crate::DistanceMatrix).
//!
//! Errors are returned when inputs are invalid, e.g. fewer than two sites.

mod error;
mod provider;

pub use error::CostMatrixError;
pub use provider::CostMatrixProvider;
