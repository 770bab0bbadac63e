//! Shared test utilities and strategies.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical helpers from lightcap::testing
pub use lightcap::testing::{is_ascending, is_permutation, linear_search, sorted_fixture};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Arbitrary small integer vectors, including empty ones.
pub fn int_vec_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..64)
}

/// Non-empty integer vectors.
pub fn non_empty_vec_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 1..64)
}

/// Ascending vectors with plenty of duplicates (narrow value range).
pub fn sorted_vec_strategy() -> impl Strategy<Value = Vec<i32>> {
    int_vec_strategy().prop_map(|mut v| {
        v.sort();
        v
    })
}

/// Keys drawn from a slightly wider range than the vectors, so both hits
/// and misses (including off either end) are common.
pub fn key_strategy() -> impl Strategy<Value = i32> {
    -60i32..60
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that a search result is consistent with the linear oracle.
pub fn assert_search_agrees(sorted: &[i32], key: i32, result: Option<(usize, &i32)>) {
    let hits = linear_search(sorted, &key);
    match result {
        Some((i, v)) => {
            assert_eq!(*v, key, "returned value differs from key");
            assert_eq!(sorted[i], *v, "returned index does not hold returned value");
            assert!(hits.contains(&i), "index {} is not an occurrence of {}", i, key);
        }
        None => assert!(
            hits.is_empty(),
            "search missed key {} present at {:?}",
            key,
            hits
        ),
    }
}
