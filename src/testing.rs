//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

/// `[1, 3, 5, 7, 9, 11]`, the canonical sorted fixture.
pub fn sorted_fixture() -> Vec<i32> {
    vec![1, 3, 5, 7, 9, 11]
}

/// Every index at which `key` occurs. The reference oracle for search.
pub fn linear_search<T: PartialEq>(slice: &[T], key: &T) -> Vec<usize> {
    slice
        .iter()
        .enumerate()
        .filter(|(_, x)| *x == key)
        .map(|(i, _)| i)
        .collect()
}

/// Whether `slice` is in ascending order.
pub fn is_ascending<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Whether `a` and `b` hold the same elements with the same multiplicities.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

/// `n` ascending even numbers `0, 2, 4, ...`, so odd keys are guaranteed misses.
pub fn even_numbers(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| i * 2).collect()
}
