//! Behavioural tests for `NearestNeighbourSolver` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use salesman_core::test_support::{four_city_matrix, matrix, two_city_matrix};
use salesman_core::{BestOfStarts, DistanceMatrix, SolveError, Tour, TourSolver};
use salesman_solver_greedy::NearestNeighbourSolver;

#[derive(Debug, Default)]
struct GreedyWorld {
    matrix: RefCell<Option<DistanceMatrix>>,
    outcome: RefCell<Option<Result<Tour, SolveError>>>,
}

impl GreedyWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<Tour, SolveError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_matrix(&self) -> DistanceMatrix {
        self.matrix
            .borrow()
            .clone()
            .expect("matrix should be prepared")
    }
}

#[fixture]
fn world() -> GreedyWorld {
    GreedyWorld::default()
}

#[given("the four-city reference matrix")]
fn given_reference_matrix(world: &GreedyWorld) {
    world.matrix.replace(Some(four_city_matrix()));
}

#[given("the two-city matrix")]
fn given_two_city_matrix(world: &GreedyWorld) {
    world.matrix.replace(Some(two_city_matrix()));
}

#[given("a matrix where cities 1 and 2 share a location")]
fn given_colocated_cities(world: &GreedyWorld) {
    world.matrix.replace(Some(matrix(vec![
        vec![0.0, 5.0, 6.0],
        vec![5.0, 0.0, 0.0],
        vec![6.0, 0.0, 0.0],
    ])));
}

#[given("a one-way ring where only one direction is cheap")]
fn given_one_way_ring(world: &GreedyWorld) {
    world.matrix.replace(Some(matrix(vec![
        vec![0.0, 1.0, 9.0],
        vec![9.0, 0.0, 1.0],
        vec![1.0, 9.0, 0.0],
    ])));
}

#[when("the nearest-neighbour solver runs from city 0")]
fn when_solver_runs(world: &GreedyWorld) {
    let outcome = NearestNeighbourSolver::new().solve(&world.expect_matrix(), 0);
    world.outcome.replace(Some(outcome));
}

#[when("the best-of-starts driver runs the nearest-neighbour solver")]
fn when_driver_runs(world: &GreedyWorld) {
    let outcome = BestOfStarts::new(NearestNeighbourSolver::new()).solve(&world.expect_matrix());
    world.outcome.replace(Some(outcome));
}

#[then("the tour visits 0, 1, 3, 2, 0")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_reference_path(world: &GreedyWorld) {
    let tour = world.expect_outcome().expect("expected solve success");
    assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
}

#[then("the tour visits 0, 1, 0")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_two_city_path(world: &GreedyWorld) {
    let tour = world.expect_outcome().expect("expected solve success");
    assert_eq!(tour.path(), &[0, 1, 0]);
}

#[then("the tour costs 80")]
#[expect(
    clippy::expect_used,
    clippy::float_cmp,
    reason = "behaviour tests use expect and strict float checks for clarity"
)]
fn then_costs_eighty(world: &GreedyWorld) {
    let tour = world.expect_outcome().expect("expected solve success");
    assert_eq!(tour.total_cost(), 80.0);
}

#[then("the tour costs 3")]
#[expect(
    clippy::expect_used,
    clippy::float_cmp,
    reason = "behaviour tests use expect and strict float checks for clarity"
)]
fn then_costs_three(world: &GreedyWorld) {
    let tour = world.expect_outcome().expect("expected solve success");
    assert_eq!(tour.total_cost(), 3.0);
}

#[then("the solve fails with UnreachableCity from city 1")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_unreachable_city(world: &GreedyWorld) {
    let err = world
        .expect_outcome()
        .expect_err("expected UnreachableCity error");
    assert!(matches!(err, SolveError::UnreachableCity { from: 1, .. }));
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 0)]
fn reference_problem(world: GreedyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 1)]
fn two_cities(world: GreedyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 2)]
fn colocated_cities(world: GreedyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 3)]
fn best_of_starts(world: GreedyWorld) {
    let _ = world;
}
