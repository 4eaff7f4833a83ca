//! Flat Held-Karp memo table.
//!
//! Entry `(subset, city)` holds the cheapest cost of a path that leaves the
//! start, visits exactly the cities in `subset` and ends at `city`. Every
//! stored subset contains the start, so its bit is squeezed out of the row
//! index and the table has `2^(N-1)` rows of `N` entries.

use salesman_core::{CityIndex, SolveError};

use crate::subsets::bit;

#[derive(Debug)]
pub(crate) struct MemoTable {
    cities: usize,
    start: CityIndex,
    costs: Vec<f64>,
}

impl MemoTable {
    /// Allocate a table filled with `f64::INFINITY`.
    ///
    /// Allocation failure is reported instead of aborting the process.
    pub(crate) fn allocate(cities: usize, start: CityIndex) -> Result<Self, SolveError> {
        let too_large = || SolveError::MemoTableTooLarge { cities };
        let rows = cities
            .checked_sub(1)
            .and_then(|width| u32::try_from(width).ok())
            .and_then(|width| 1_usize.checked_shl(width))
            .ok_or_else(too_large)?;
        let len = rows.checked_mul(cities).ok_or_else(too_large)?;
        let mut costs = Vec::new();
        costs.try_reserve_exact(len).map_err(|_| too_large())?;
        costs.resize(len, f64::INFINITY);
        log::trace!("allocated a {rows}x{cities} memo table");
        Ok(Self {
            cities,
            start,
            costs,
        })
    }

    /// Cost stored for `(subset, city)`, or infinity when unset.
    pub(crate) fn get(&self, subset: usize, city: CityIndex) -> f64 {
        self.slot(subset, city)
            .and_then(|index| self.costs.get(index))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    pub(crate) fn set(&mut self, subset: usize, city: CityIndex, cost: f64) {
        if let Some(entry) = self
            .slot(subset, city)
            .and_then(|index| self.costs.get_mut(index))
        {
            *entry = cost;
        }
    }

    fn slot(&self, subset: usize, city: CityIndex) -> Option<usize> {
        if city >= self.cities {
            return None;
        }
        self.row(subset)
            .checked_mul(self.cities)?
            .checked_add(city)
    }

    /// Row index of `subset` with the start bit removed.
    const fn row(&self, subset: usize) -> usize {
        let below = bit(self.start) - 1;
        (subset & below) | ((subset >> 1) & !below)
    }

    #[cfg(test)]
    const fn len(&self) -> usize {
        self.costs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0b1011, 0b101)]
    #[case(1, 0b1011, 0b101)]
    #[case(2, 0b0111, 0b011)]
    #[case(3, 0b1001, 0b001)]
    fn row_drops_the_start_bit(#[case] start: CityIndex, #[case] subset: usize, #[case] row: usize) {
        let memo = MemoTable::allocate(4, start).expect("small table");
        assert_eq!(memo.row(subset), row);
    }

    #[rstest]
    fn table_has_one_row_per_subset_without_start() {
        let memo = MemoTable::allocate(4, 2).expect("small table");
        assert_eq!(memo.len(), 8 * 4);
    }

    #[rstest]
    fn unset_entries_are_infinite() {
        let mut memo = MemoTable::allocate(3, 0).expect("small table");
        assert!(memo.get(0b011, 1).is_infinite());
        memo.set(0b011, 1, 4.5);
        assert_eq!(memo.get(0b011, 1), 4.5);
        assert!(memo.get(0b011, 2).is_infinite());
    }

    #[rstest]
    fn out_of_range_city_is_ignored() {
        let mut memo = MemoTable::allocate(3, 0).expect("small table");
        memo.set(0b111, 3, 1.0);
        assert!(memo.get(0b111, 3).is_infinite());
    }

    #[rstest]
    fn oversized_table_is_reported() {
        let cities = usize::BITS as usize + 2;
        let err = MemoTable::allocate(cities, 0).expect_err("table cannot exist");
        assert_eq!(err, SolveError::MemoTableTooLarge { cities });
    }
}
