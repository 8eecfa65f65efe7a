mod algorithms;
#[cfg(test)]
mod proptests;

use std::cmp::Ordering;

use vector::Vector;

pub use algorithms::common::is_sorted_by_key;
pub use algorithms::counting_sort::sort as counting_sort;

/// Fixed-width record: `key` orders, `payload` rides along.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Record {
    pub key: u32,
    pub payload: u64,
}

impl Record {
    #[inline]
    pub const fn new(key: u32, payload: u64) -> Self {
        Self { key, payload }
    }
}

impl From<(u32, u64)> for Record {
    #[inline]
    fn from((key, payload): (u32, u64)) -> Self {
        Self::new(key, payload)
    }
}

/// Strict less-than on keys; payloads never take part.
#[inline]
pub fn key_less(left: &Record, right: &Record) -> bool {
    left.key < right.key
}

/// `key_less` as an `Ordering`, for slice sort APIs.
#[inline]
pub fn key_order(left: &Record, right: &Record) -> Ordering {
    if key_less(left, right) {
        Ordering::Less
    } else if key_less(right, left) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    CountingSort,
    StdStableSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] =
    [SortAlgorithm::CountingSort, SortAlgorithm::StdStableSort];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::CountingSort => "counting_sort",
        SortAlgorithm::StdStableSort => "std_stable",
    }
}

/// Sorts `data` ascending by key; both algorithms are stable.
pub fn sort_records(algo: SortAlgorithm, data: &mut Vector<Record>) {
    match algo {
        SortAlgorithm::CountingSort => counting_sort(data),
        SortAlgorithm::StdStableSort => data.sort_by(key_order),
    }
}
