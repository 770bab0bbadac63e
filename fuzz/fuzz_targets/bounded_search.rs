// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded binary search.
//!
//! The fuzzer supplies an arbitrary array and key. The array is sorted first
//! (search has a sortedness precondition), then every result is checked
//! against a linear scan. Debug contracts in the kernel catch any index that
//! escapes its scope before it turns into an out-of-bounds read.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lightcap::testing::linear_search;
use lightcap::{lower_bound, search};

#[derive(Arbitrary, Debug)]
struct Input {
    values: Vec<i16>,
    key: i16,
}

fuzz_target!(|input: Input| {
    let mut sorted = input.values;
    sorted.sort();

    let hits = linear_search(&sorted, &input.key);
    match search(&sorted, &input.key) {
        Some((i, v)) => {
            assert_eq!(*v, input.key);
            assert!(hits.contains(&i), "index {} is not an occurrence", i);
        }
        None => assert!(hits.is_empty(), "missed key at {:?}", hits),
    }

    let at = lower_bound(&sorted, &input.key);
    assert_eq!(at, sorted.partition_point(|x| *x < input.key));
});
