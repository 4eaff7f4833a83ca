//! `HeldKarpSolver`: exact single-start tours by subset dynamic programming.

use std::time::Duration;

use salesman_core::{
    CancelToken, CityIndex, DistanceMatrix, InvalidInputError, SolveBudget, SolveError, Tour,
    TourSolver,
};

use crate::memo::MemoTable;
use crate::subsets::{FixedSizeSubsets, bit, full_set, members};

/// Largest problem the solver accepts whatever the configuration says.
///
/// Subsets are `usize` bitmasks and the memo table needs `2^(N-1) * N`
/// entries, which is already about 128 GiB at this size.
pub const HARD_CITY_LIMIT: usize = 30;

/// Subsets processed between budget checks inside one layer.
const CHECK_INTERVAL: usize = 1024;

/// Configuration for [`HeldKarpSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HeldKarpConfig {
    /// Largest city count the solver will attempt, capped at
    /// [`HARD_CITY_LIMIT`].
    pub max_cities: usize,
    /// Wall-clock limit for one solve call.
    pub time_limit: Option<Duration>,
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            max_cities: 20,
            time_limit: None,
        }
    }
}

impl HeldKarpConfig {
    /// Replace the city limit.
    #[must_use]
    pub const fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities;
        self
    }

    /// Replace the time limit.
    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// The city limit actually enforced.
    #[must_use]
    pub fn city_limit(&self) -> usize {
        self.max_cities.min(HARD_CITY_LIMIT)
    }
}

/// Exact solver returning a minimal-cost closed tour from a fixed start.
///
/// Each call allocates its own memo table, so one solver can serve
/// concurrent solves on different threads.
#[derive(Debug, Clone, Default)]
pub struct HeldKarpSolver {
    config: HeldKarpConfig,
    cancel: Option<CancelToken>,
}

impl HeldKarpSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: HeldKarpConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Stop solves early once `token` is cancelled.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The solver's configuration.
    #[must_use]
    pub const fn config(&self) -> &HeldKarpConfig {
        &self.config
    }

    fn check_size(&self, matrix: &DistanceMatrix) -> Result<(), InvalidInputError> {
        let cities = matrix.city_count();
        let limit = self.config.city_limit();
        if cities > limit {
            return Err(InvalidInputError::TooManyCities { cities, limit });
        }
        Ok(())
    }
}

impl TourSolver for HeldKarpSolver {
    fn name(&self) -> &'static str {
        "held-karp"
    }

    fn solve(&self, matrix: &DistanceMatrix, start: CityIndex) -> Result<Tour, SolveError> {
        matrix.check_start(start)?;
        self.check_size(matrix)?;
        let budget = SolveBudget::start(self.config.time_limit, self.cancel.clone());
        let cities = matrix.city_count();
        log::debug!("held-karp: solving {cities} cities from start {start}");
        budget.check()?;

        let mut memo = MemoTable::allocate(cities, start)?;
        seed_pairs(&mut memo, matrix, start);
        for size in 3..=cities {
            budget.check()?;
            log::trace!("held-karp: filling subsets of size {size}/{cities}");
            fill_layer(&mut memo, matrix, start, size, &budget)?;
        }

        let optimum = closing_cost(&memo, matrix, start);
        if !optimum.is_finite() {
            log::debug!("held-karp: every tour from {start} crosses an unreachable edge");
            return Err(SolveError::NoFiniteTour { start });
        }
        let tour = Tour::from_path(matrix, reconstruct(&memo, matrix, start))?;
        log::debug!(
            "held-karp: optimal tour from {start} costs {}",
            tour.total_cost()
        );
        Ok(tour)
    }
}

fn edge(matrix: &DistanceMatrix, from: CityIndex, to: CityIndex) -> f64 {
    matrix.cost(from, to).unwrap_or(f64::INFINITY)
}

/// Base case: reaching `city` directly from the start.
fn seed_pairs(memo: &mut MemoTable, matrix: &DistanceMatrix, start: CityIndex) {
    for city in (0..matrix.city_count()).filter(|&city| city != start) {
        memo.set(bit(start) | bit(city), city, edge(matrix, start, city));
    }
}

/// Fill every entry whose subset has `size` members, the start included.
fn fill_layer(
    memo: &mut MemoTable,
    matrix: &DistanceMatrix,
    start: CityIndex,
    size: usize,
    budget: &SolveBudget,
) -> Result<(), SolveError> {
    let cities = matrix.city_count();
    for (seen, subset) in FixedSizeSubsets::new(cities, size).enumerate() {
        if seen & (CHECK_INTERVAL - 1) == 0 {
            budget.check()?;
        }
        if subset & bit(start) == 0 {
            continue;
        }
        for next in members(subset, cities).filter(|&city| city != start) {
            let cost = cheapest_arrival(memo, matrix, start, subset, next);
            memo.set(subset, next, cost);
        }
    }
    Ok(())
}

/// Cheapest way to end at `next` having visited exactly `subset`.
#[expect(
    clippy::float_arithmetic,
    reason = "path costs are sums of floating-point edges"
)]
fn cheapest_arrival(
    memo: &MemoTable,
    matrix: &DistanceMatrix,
    start: CityIndex,
    subset: usize,
    next: CityIndex,
) -> f64 {
    let previous = subset & !bit(next);
    members(previous, matrix.city_count())
        .filter(|&last| last != start)
        .map(|last| memo.get(previous, last) + edge(matrix, last, next))
        .fold(f64::INFINITY, f64::min)
}

#[expect(
    clippy::float_arithmetic,
    reason = "path costs are sums of floating-point edges"
)]
fn closing_cost(memo: &MemoTable, matrix: &DistanceMatrix, start: CityIndex) -> f64 {
    let cities = matrix.city_count();
    let full = full_set(cities);
    (0..cities)
        .filter(|&city| city != start)
        .map(|city| memo.get(full, city) + edge(matrix, city, start))
        .fold(f64::INFINITY, f64::min)
}

/// Walk back from the full set, each step choosing the city whose memo entry
/// plus the edge to the city after it is cheapest.
///
/// Ties go to the higher index. Including the edge cost means the chosen
/// predecessor always lies on an optimal tour.
#[expect(
    clippy::float_arithmetic,
    reason = "path costs are sums of floating-point edges"
)]
fn reconstruct(memo: &MemoTable, matrix: &DistanceMatrix, start: CityIndex) -> Vec<CityIndex> {
    let cities = matrix.city_count();
    let mut state = full_set(cities);
    let mut after = start;
    let mut backwards = Vec::with_capacity(cities);
    while state != bit(start) {
        let mut choice = None;
        let mut best = f64::INFINITY;
        for city in members(state, cities).filter(|&city| city != start) {
            let cost = memo.get(state, city) + edge(matrix, city, after);
            if cost <= best {
                best = cost;
                choice = Some(city);
            }
        }
        let Some(city) = choice else {
            break;
        };
        backwards.push(city);
        state &= !bit(city);
        after = city;
    }

    let mut path = Vec::with_capacity(cities + 1);
    path.push(start);
    path.extend(backwards.into_iter().rev());
    path.push(start);
    path
}
