//! Dense pairwise travel costs between cities.
//!
//! A [`DistanceMatrix`] is validated once when it is built and is immutable
//! afterwards, so solvers can read it concurrently without copying. Costs need
//! not be symmetric. An unreachable pair is `f64::INFINITY`; the diagonal is
//! stored but never read.

use crate::error::InvalidInputError;

/// Position of a city in a [`DistanceMatrix`].
///
/// Cities have no identity beyond their index; callers map indices back to
/// their own labels after solving.
pub type CityIndex = usize;

/// Square matrix of non-negative travel costs.
///
/// # Examples
/// ```
/// use salesman_core::DistanceMatrix;
///
/// # fn main() -> Result<(), salesman_core::InvalidInputError> {
/// let matrix = DistanceMatrix::new(vec![vec![0.0, 5.0], vec![7.0, 0.0]])?;
/// assert_eq!(matrix.city_count(), 2);
/// assert_eq!(matrix.cost(1, 0), Some(7.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Option<f64>>>", into = "Vec<Vec<Option<f64>>>")
)]
pub struct DistanceMatrix {
    cities: usize,
    costs: Vec<f64>,
}

impl DistanceMatrix {
    /// Validate rows and build a matrix.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::TooFewCities`] for fewer than two rows,
    /// [`InvalidInputError::NotSquare`] when a row length differs from the
    /// row count, and [`InvalidInputError::NegativeCost`] or
    /// [`InvalidInputError::NotANumber`] for a bad off-diagonal entry.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, InvalidInputError> {
        let cities = rows.len();
        if cities < 2 {
            return Err(InvalidInputError::TooFewCities { cities });
        }
        let mut costs = Vec::with_capacity(cities * cities);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != cities {
                return Err(InvalidInputError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: cities,
                });
            }
            for (col, cost) in entries.iter().enumerate() {
                if row != col {
                    check_cost(row, col, *cost)?;
                }
            }
            costs.extend(entries);
        }
        Ok(Self { cities, costs })
    }

    /// Build a matrix by evaluating `cost(from, to)` for every off-diagonal
    /// pair. Diagonal entries are zero.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`DistanceMatrix::new`].
    ///
    /// # Examples
    /// ```
    /// use salesman_core::DistanceMatrix;
    ///
    /// # fn main() -> Result<(), salesman_core::InvalidInputError> {
    /// let matrix = DistanceMatrix::from_fn(3, |from, to| if to > from { 1.0 } else { 2.0 })?;
    /// assert_eq!(matrix.cost(0, 2), Some(1.0));
    /// assert_eq!(matrix.cost(2, 0), Some(2.0));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_fn<F>(cities: usize, mut cost: F) -> Result<Self, InvalidInputError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let rows = (0..cities)
            .map(|from| {
                (0..cities)
                    .map(|to| if from == to { 0.0 } else { cost(from, to) })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// Number of cities, `N`.
    #[must_use]
    pub const fn city_count(&self) -> usize {
        self.cities
    }

    /// Cost of travelling from `from` to `to`, or `None` when either index is
    /// out of range.
    #[must_use]
    pub fn cost(&self, from: CityIndex, to: CityIndex) -> Option<f64> {
        if from >= self.cities || to >= self.cities {
            return None;
        }
        self.costs.get(from * self.cities + to).copied()
    }

    /// Check that `start` names a city in this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::StartOutOfRange`] otherwise.
    pub const fn check_start(&self, start: CityIndex) -> Result<(), InvalidInputError> {
        if start < self.cities {
            Ok(())
        } else {
            Err(InvalidInputError::StartOutOfRange {
                start,
                cities: self.cities,
            })
        }
    }

    /// Sum of consecutive edge costs along `path`.
    ///
    /// Returns `None` if any index is out of range. An empty or single-entry
    /// path costs nothing.
    ///
    /// # Examples
    /// ```
    /// use salesman_core::DistanceMatrix;
    ///
    /// # fn main() -> Result<(), salesman_core::InvalidInputError> {
    /// let matrix = DistanceMatrix::new(vec![vec![0.0, 5.0], vec![7.0, 0.0]])?;
    /// assert_eq!(matrix.path_cost(&[0, 1, 0]), Some(12.0));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "path cost is a floating-point sum of edge costs"
    )]
    pub fn path_cost(&self, path: &[CityIndex]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |total, edge| match edge {
            [from, to] => self.cost(*from, *to).map(|cost| total + cost),
            _ => Some(total),
        })
    }

    /// Whether `cost(i, j) == cost(j, i)` for every off-diagonal pair.
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "symmetry means the stored costs are identical"
    )]
    pub fn is_symmetric(&self) -> bool {
        (0..self.cities).all(|from| {
            (from + 1..self.cities).all(|to| {
                self.cost(from, to)
                    .zip(self.cost(to, from))
                    .is_some_and(|(there, back)| there == back)
            })
        })
    }

    /// Iterate over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.costs.chunks(self.cities)
    }
}

fn check_cost(from: CityIndex, to: CityIndex, cost: f64) -> Result<(), InvalidInputError> {
    if cost.is_nan() {
        return Err(InvalidInputError::NotANumber { from, to });
    }
    if cost < 0.0 {
        return Err(InvalidInputError::NegativeCost { from, to, cost });
    }
    Ok(())
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = InvalidInputError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

/// Wire form used by routing services: `None` marks an unreachable pair.
impl TryFrom<Vec<Vec<Option<f64>>>> for DistanceMatrix {
    type Error = InvalidInputError;

    fn try_from(rows: Vec<Vec<Option<f64>>>) -> Result<Self, Self::Error> {
        Self::new(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cost| cost.unwrap_or(f64::INFINITY))
                        .collect()
                })
                .collect(),
        )
    }
}

impl From<DistanceMatrix> for Vec<Vec<Option<f64>>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cost| cost.is_finite().then_some(*cost))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Vec::new(), 0)]
    #[case(vec![vec![0.0]], 1)]
    fn rejects_fewer_than_two_cities(#[case] rows: Vec<Vec<f64>>, #[case] cities: usize) {
        let err = DistanceMatrix::new(rows).expect_err("matrix should be rejected");
        assert_eq!(err, InvalidInputError::TooFewCities { cities });
    }

    #[rstest]
    fn rejects_ragged_rows() {
        let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]])
            .expect_err("ragged matrix should be rejected");
        assert_eq!(
            err,
            InvalidInputError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[rstest]
    fn rejects_negative_off_diagonal_cost() {
        let err = DistanceMatrix::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]])
            .expect_err("negative cost should be rejected");
        assert!(matches!(
            err,
            InvalidInputError::NegativeCost { from: 0, to: 1, .. }
        ));
    }

    #[rstest]
    fn rejects_nan_off_diagonal_cost() {
        let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![f64::NAN, 0.0]])
            .expect_err("NaN cost should be rejected");
        assert_eq!(err, InvalidInputError::NotANumber { from: 1, to: 0 });
    }

    #[rstest]
    fn accepts_unreachable_edges_and_ignores_diagonal() {
        let matrix = DistanceMatrix::new(vec![
            vec![f64::NAN, f64::INFINITY],
            vec![3.0, -1.0],
        ])
        .expect("diagonal is never validated");
        assert_eq!(matrix.cost(0, 1), Some(f64::INFINITY));
        assert_eq!(matrix.cost(2, 0), None);
    }

    #[rstest]
    #[case(0, true)]
    #[case(2, true)]
    #[case(3, false)]
    fn checks_start_range(#[case] start: CityIndex, #[case] valid: bool) {
        let matrix = DistanceMatrix::from_fn(3, |_, _| 1.0).expect("valid matrix");
        assert_eq!(matrix.check_start(start).is_ok(), valid);
    }

    #[rstest]
    fn detects_asymmetry() {
        let symmetric = DistanceMatrix::from_fn(3, |from, to| (from + to) as f64)
            .expect("valid matrix");
        let asymmetric = DistanceMatrix::from_fn(3, |from, _| from as f64 + 1.0)
            .expect("valid matrix");
        assert!(symmetric.is_symmetric());
        assert!(!asymmetric.is_symmetric());
    }

    #[rstest]
    fn path_cost_rejects_out_of_range_cities() {
        let matrix = DistanceMatrix::from_fn(2, |_, _| 1.0).expect("valid matrix");
        assert_eq!(matrix.path_cost(&[0, 2]), None);
        assert_eq!(matrix.path_cost(&[0]), Some(0.0));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn unreachable_edges_serialise_as_null() {
        let matrix = DistanceMatrix::new(vec![vec![0.0, f64::INFINITY], vec![2.5, 0.0]])
            .expect("valid matrix");
        let json = serde_json::to_string(&matrix).expect("serialise matrix");
        assert_eq!(json, "[[0.0,null],[2.5,0.0]]");
        let decoded: DistanceMatrix = serde_json::from_str(&json).expect("decode matrix");
        assert_eq!(decoded, matrix);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialisation_validates_rows() {
        let err = serde_json::from_str::<DistanceMatrix>("[[0.0, 1.0], [1.0]]")
            .expect_err("ragged matrix should fail to decode");
        assert!(err.to_string().contains("row 1 has 1 entries"));
    }
}
