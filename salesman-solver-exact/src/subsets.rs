//! Iterative bitmask subset enumeration.
//!
//! Bit `i` of a mask set means city `i` is in the subset. Masks are at most
//! [`HARD_CITY_LIMIT`](crate::HARD_CITY_LIMIT) bits wide.

use salesman_core::CityIndex;

/// Mask with only `city` set.
pub(crate) const fn bit(city: CityIndex) -> usize {
    1 << city
}

/// Mask with every one of the first `cities` bits set.
pub(crate) const fn full_set(cities: usize) -> usize {
    bit(cities) - 1
}

/// Members of `mask` among the first `cities` cities, in increasing order.
pub(crate) fn members(mask: usize, cities: usize) -> impl Iterator<Item = CityIndex> {
    (0..cities).filter(move |&city| mask & bit(city) != 0)
}

/// Every `size`-member subset of `cities` cities in increasing numeric order.
///
/// Successors are produced with Gosper's hack, so no recursion or auxiliary
/// buffer is needed.
#[derive(Debug, Clone)]
pub(crate) struct FixedSizeSubsets {
    next: Option<usize>,
    end: usize,
}

impl FixedSizeSubsets {
    pub(crate) const fn new(cities: usize, size: usize) -> Self {
        let next = if size == 0 || size > cities {
            None
        } else {
            Some(full_set(size))
        };
        Self {
            next,
            end: bit(cities),
        }
    }
}

impl Iterator for FixedSizeSubsets {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next.filter(|&mask| mask < self.end)?;
        self.next = successor(current);
        Some(current)
    }
}

/// Next larger mask with the same number of set bits.
const fn successor(mask: usize) -> Option<usize> {
    let lowest = mask & mask.wrapping_neg();
    let Some(ripple) = mask.checked_add(lowest) else {
        return None;
    };
    Some((((ripple ^ mask) >> 2) >> lowest.trailing_zeros()) | ripple)
}
