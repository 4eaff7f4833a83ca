//! Cooperative cancellation and time limits for long-running solves.
//!
//! Exact solvers grow exponentially with the number of cities. A
//! [`SolveBudget`] lets them stop early at well-defined checkpoints instead of
//! running until memory or patience runs out.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::SolveError;

/// Shared flag a caller sets to ask running solves to stop.
///
/// Clones observe the same flag, so one handle can be kept by the caller while
/// another is moved into a solver running on a different thread.
///
/// # Examples
/// ```
/// use salesman_core::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Limits for a single solve call.
///
/// The deadline is measured from [`SolveBudget::start`], so a budget must be
/// created inside the solve it governs.
#[derive(Debug, Clone, Default)]
pub struct SolveBudget {
    token: Option<CancelToken>,
    deadline: Option<(Instant, Duration)>,
}

impl SolveBudget {
    /// A budget that never stops the solve.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Start the clock for a solve with an optional time limit and token.
    #[must_use]
    pub fn start(time_limit: Option<Duration>, token: Option<CancelToken>) -> Self {
        let deadline = time_limit.and_then(|limit| {
            Instant::now()
                .checked_add(limit)
                .map(|instant| (instant, limit))
        });
        Self { token, deadline }
    }

    /// Return an error if the solve should stop now.
    ///
    /// Cancellation takes precedence over an expired deadline.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Cancelled`] once the token is set and
    /// [`SolveError::TimedOut`] once the deadline has passed.
    pub fn check(&self) -> Result<(), SolveError> {
        if self.token.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(SolveError::Cancelled);
        }
        match self.deadline {
            Some((deadline, limit)) if Instant::now() >= deadline => {
                Err(SolveError::TimedOut { limit })
            }
            _ => Ok(()),
        }
    }
}
