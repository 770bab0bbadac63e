// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the sortedness capability.
//!
//! Whatever goes in, what comes out is ascending, a permutation of the input,
//! and immune to later mutation of either the input or a returned copy.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lightcap::testing::{is_ascending, is_permutation};
use lightcap::{SortedSlice, SortedVec};

fuzz_target!(|values: Vec<u8>| {
    let mut input = values.clone();
    let sorted = SortedVec::from_slice(&input);

    let out = sorted.to_vec();
    assert!(is_ascending(&out));
    assert!(is_permutation(&out, &values));

    input.reverse();
    input.push(0);
    let mut copy = sorted.to_vec();
    copy.push(255);
    assert_eq!(sorted.to_vec(), out);

    assert_eq!(SortedSlice::new(&values).is_some(), is_ascending(&values));
    assert!(SortedSlice::new(sorted.as_slice()).is_some());
});
