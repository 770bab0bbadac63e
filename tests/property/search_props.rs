//! Properties of bounded binary search.
//!
//! 1. Found results hold the key at the returned index
//! 2. Misses only happen when the key is absent
//! 3. Lower bound agrees with `partition_point`

use super::common::{assert_search_agrees, key_strategy, sorted_vec_strategy};
use lightcap::{lower_bound, search, search_by};
use proptest::prelude::*;
use std::cmp::Ordering;

proptest! {
    /// Property: search agrees with a linear scan
    #[test]
    fn prop_search_agrees_with_oracle(sorted in sorted_vec_strategy(), key in key_strategy()) {
        assert_search_agrees(&sorted, key, search(&sorted, &key));
    }

    /// Property: every present element is found
    #[test]
    fn prop_every_element_found(sorted in sorted_vec_strategy()) {
        for x in &sorted {
            let (i, v) = search(&sorted, x).expect("present element must be found");
            prop_assert_eq!(v, x);
            prop_assert_eq!(&sorted[i], x);
        }
    }

    /// Property: results match std's binary_search on hit/miss
    #[test]
    fn prop_matches_std_hit_or_miss(sorted in sorted_vec_strategy(), key in key_strategy()) {
        prop_assert_eq!(search(&sorted, &key).is_some(), sorted.binary_search(&key).is_ok());
    }

    /// Property: a reversed comparator searches a descending array
    #[test]
    fn prop_custom_comparator(sorted in sorted_vec_strategy(), key in key_strategy()) {
        let descending: Vec<i32> = sorted.iter().rev().copied().collect();
        let found = search_by(&descending, &key, |k, x| x.cmp(k));
        prop_assert_eq!(found.is_some(), sorted.contains(&key));
        if let Some((i, v)) = found {
            prop_assert_eq!(descending[i], *v);
            prop_assert_eq!(*v, key);
        }
    }

    /// Property: comparisons are bounded by floor(log2 n) + 1
    #[test]
    fn prop_logarithmic_comparisons(sorted in sorted_vec_strategy(), key in key_strategy()) {
        let mut calls = 0usize;
        search_by(&sorted, &key, |k, x| {
            calls += 1;
            k.cmp(x)
        });
        let bound = if sorted.is_empty() { 0 } else { sorted.len().ilog2() as usize + 1 };
        prop_assert!(calls <= bound, "{} comparisons for n = {}", calls, sorted.len());
    }

    /// Property: lower_bound is the partition point
    #[test]
    fn prop_lower_bound_is_partition_point(sorted in sorted_vec_strategy(), key in key_strategy()) {
        let expected = sorted.partition_point(|x| x.cmp(&key) == Ordering::Less);
        prop_assert_eq!(lower_bound(&sorted, &key), expected);
    }
}
