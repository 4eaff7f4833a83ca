use salesman_core::{CityIndex, DistanceMatrix, SolveError, Tour, TourSolver};

/// Greedy solver that always travels to the nearest unvisited city.
///
/// A candidate must be unvisited and reachable at a strictly positive cost.
/// Zero-cost edges usually mean two sites geocoded to the same point and are
/// never followed. Among eligible candidates the cheapest wins, with the
/// lowest index breaking ties.
///
/// # Examples
/// ```
/// use salesman_core::{DistanceMatrix, TourSolver};
/// use salesman_solver_greedy::NearestNeighbourSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])?;
/// let tour = NearestNeighbourSolver::new().solve(&matrix, 0)?;
/// assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourSolver;

impl NearestNeighbourSolver {
    /// Construct the solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TourSolver for NearestNeighbourSolver {
    fn name(&self) -> &'static str {
        "nearest-neighbour"
    }

    fn solve(&self, matrix: &DistanceMatrix, start: CityIndex) -> Result<Tour, SolveError> {
        matrix.check_start(start)?;
        let cities = matrix.city_count();
        log::debug!("nearest-neighbour: solving {cities} cities from start {start}");

        let mut visited = vec![false; cities];
        mark(&mut visited, start);
        let mut path = Vec::with_capacity(cities + 1);
        path.push(start);
        let mut current = start;
        while path.len() < cities {
            let next = nearest_unvisited(matrix, &visited, current).ok_or(
                SolveError::UnreachableCity {
                    from: current,
                    visited: path.len(),
                    cities,
                },
            )?;
            log::trace!("nearest-neighbour: {current} -> {next}");
            mark(&mut visited, next);
            path.push(next);
            current = next;
        }

        if !matrix.cost(current, start).is_some_and(f64::is_finite) {
            log::debug!("nearest-neighbour: city {current} cannot return to {start}");
            return Err(SolveError::NoFiniteTour { start });
        }
        path.push(start);
        let tour = Tour::from_path(matrix, path)?;
        log::debug!(
            "nearest-neighbour: tour from {start} costs {}",
            tour.total_cost()
        );
        Ok(tour)
    }
}

fn mark(visited: &mut [bool], city: CityIndex) {
    if let Some(flag) = visited.get_mut(city) {
        *flag = true;
    }
}

/// Closest eligible city from `current`, lowest index first on ties.
fn nearest_unvisited(
    matrix: &DistanceMatrix,
    visited: &[bool],
    current: CityIndex,
) -> Option<CityIndex> {
    let mut nearest: Option<(CityIndex, f64)> = None;
    for (city, _) in visited.iter().enumerate().filter(|&(_, seen)| !seen) {
        let Some(cost) = matrix.cost(current, city) else {
            continue;
        };
        if !cost.is_finite() || cost <= 0.0 {
            continue;
        }
        if nearest.is_none_or(|(_, best)| cost < best) {
            nearest = Some((city, cost));
        }
    }
    nearest.map(|(city, _)| city)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use salesman_core::InvalidInputError;
    use salesman_core::test_support::{four_city_matrix, matrix, two_city_matrix};

    const INF: f64 = f64::INFINITY;

    #[fixture]
    fn solver() -> NearestNeighbourSolver {
        NearestNeighbourSolver::new()
    }

    #[rstest]
    fn follows_greedy_choices_on_the_reference_problem(solver: NearestNeighbourSolver) {
        // From 0 the nearest is 1 (10); from 1 the nearer of 2 (35) and 3 (25)
        // is 3; only 2 remains, then back to 0 at 15.
        let tour = solver
            .solve(&four_city_matrix(), 0)
            .expect("solve should succeed");
        assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
        assert_eq!(tour.total_cost(), 80.0);
    }

    #[rstest]
    fn two_cities_go_there_and_back(solver: NearestNeighbourSolver) {
        let tour = solver
            .solve(&two_city_matrix(), 0)
            .expect("solve should succeed");
        assert_eq!(tour.path(), &[0, 1, 0]);
        assert_eq!(tour.total_cost(), 10.0);
    }

    #[rstest]
    fn lowest_index_wins_ties(solver: NearestNeighbourSolver) {
        let even = matrix(vec![
            vec![0.0, 4.0, 4.0],
            vec![4.0, 0.0, 4.0],
            vec![4.0, 4.0, 0.0],
        ]);
        let tour = solver.solve(&even, 2).expect("solve should succeed");
        assert_eq!(tour.path(), &[2, 0, 1, 2]);
    }

    #[rstest]
    fn zero_cost_edge_is_never_followed(solver: NearestNeighbourSolver) {
        let colocated = matrix(vec![
            vec![0.0, 5.0, 6.0],
            vec![5.0, 0.0, 0.0],
            vec![6.0, 0.0, 0.0],
        ]);
        let err = solver
            .solve(&colocated, 0)
            .expect_err("city 1 cannot reach city 2");
        assert_eq!(
            err,
            SolveError::UnreachableCity {
                from: 1,
                visited: 2,
                cities: 3
            }
        );
    }

    #[rstest]
    fn unreachable_neighbours_are_reported(solver: NearestNeighbourSolver) {
        let stranded = matrix(vec![
            vec![0.0, 1.0, 2.0],
            vec![INF, 0.0, INF],
            vec![1.0, 1.0, 0.0],
        ]);
        let err = solver.solve(&stranded, 0).expect_err("city 1 is a dead end");
        assert!(matches!(err, SolveError::UnreachableCity { from: 1, .. }));
    }

    #[rstest]
    fn infinite_closing_edge_has_no_finite_tour(solver: NearestNeighbourSolver) {
        let one_way = matrix(vec![
            vec![0.0, 1.0, 5.0],
            vec![5.0, 0.0, 1.0],
            vec![INF, 5.0, 0.0],
        ]);
        let err = solver.solve(&one_way, 0).expect_err("city 2 cannot return");
        assert_eq!(err, SolveError::NoFiniteTour { start: 0 });
    }

    #[rstest]
    fn start_out_of_range_is_invalid(solver: NearestNeighbourSolver) {
        let err = solver
            .solve(&two_city_matrix(), 2)
            .expect_err("start is out of range");
        assert_eq!(
            err,
            SolveError::InvalidInput(InvalidInputError::StartOutOfRange {
                start: 2,
                cities: 2
            })
        );
    }
}
