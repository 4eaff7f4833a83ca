//! Closed tours produced by solvers.

use crate::error::TourError;
use crate::matrix::{CityIndex, DistanceMatrix};

/// A closed tour over every city of a [`DistanceMatrix`].
///
/// The path has `N + 1` entries, visits every city exactly once and repeats
/// the start city at both ends. `total_cost` is the sum of consecutive edge
/// costs along the path. Both properties are checked by
/// [`Tour::from_path`], the only constructor.
///
/// # Examples
/// ```
/// use salesman_core::{DistanceMatrix, Tour};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let matrix = DistanceMatrix::new(vec![vec![0.0, 5.0], vec![5.0, 0.0]])?;
/// let tour = Tour::from_path(&matrix, vec![0, 1, 0])?;
/// assert_eq!(tour.path(), &[0, 1, 0]);
/// assert_eq!(tour.total_cost(), 10.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    path: Vec<CityIndex>,
    total_cost: f64,
}

impl Tour {
    /// Check that `path` is a closed tour over `matrix` and price it.
    ///
    /// # Errors
    ///
    /// Returns a [`TourError`] describing the first violated property.
    pub fn from_path(matrix: &DistanceMatrix, path: Vec<CityIndex>) -> Result<Self, TourError> {
        let cities = matrix.city_count();
        let (first, last) = match path.as_slice() {
            [first, .., last] if path.len() >= 3 => (*first, *last),
            _ => return Err(TourError::TooShort { len: path.len() }),
        };
        if first != last {
            return Err(TourError::NotClosed { first, last });
        }
        if path.len() != cities + 1 {
            return Err(TourError::WrongLength {
                expected: cities + 1,
                actual: path.len(),
            });
        }
        let mut seen = vec![false; cities];
        for &city in path.iter().skip(1) {
            let slot = seen
                .get_mut(city)
                .ok_or(TourError::CityOutOfRange { city, cities })?;
            if *slot {
                return Err(TourError::DuplicateCity { city });
            }
            *slot = true;
        }
        let total_cost = matrix
            .path_cost(&path)
            .ok_or(TourError::CityOutOfRange { city: first, cities })?;
        Ok(Self { path, total_cost })
    }

    /// The closed path, start city first and last.
    #[must_use]
    pub fn path(&self) -> &[CityIndex] {
        &self.path
    }

    /// Cities in visiting order without the closing return to the start.
    #[must_use]
    pub fn visit_order(&self) -> &[CityIndex] {
        self.path
            .get(..self.path.len().saturating_sub(1))
            .unwrap_or_default()
    }

    /// The start (and end) city.
    #[must_use]
    pub fn start(&self) -> CityIndex {
        self.path.first().copied().unwrap_or_default()
    }

    /// Sum of edge costs along the path.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Whether every edge on the tour is reachable.
    ///
    /// A tour crossing an infinite edge is structurally valid but meaningless
    /// as a route.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.total_cost.is_finite()
    }

    /// The same cities travelled in the opposite direction, re-priced against
    /// `matrix`.
    ///
    /// # Errors
    ///
    /// Returns a [`TourError`] if `matrix` is not the matrix this tour was
    /// built against.
    pub fn reversed(&self, matrix: &DistanceMatrix) -> Result<Self, TourError> {
        let path = self.path.iter().rev().copied().collect();
        Self::from_path(matrix, path)
    }

    /// Map the closed path onto caller-supplied labels.
    ///
    /// Returns `None` when `labels` has fewer entries than the tour visits.
    ///
    /// # Examples
    /// ```
    /// use salesman_core::{DistanceMatrix, Tour};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let matrix = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]])?;
    /// let tour = Tour::from_path(&matrix, vec![1, 0, 1])?;
    /// let labels = ["depot", "market"];
    /// assert_eq!(tour.labelled(&labels), Some(vec![&"market", &"depot", &"market"]));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn labelled<'a, T>(&self, labels: &'a [T]) -> Option<Vec<&'a T>> {
        self.path.iter().map(|&city| labels.get(city)).collect()
    }

    /// Decompose into the path and its total cost.
    #[must_use]
    pub fn into_parts(self) -> (Vec<CityIndex>, f64) {
        (self.path, self.total_cost)
    }
}
