// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the non-empty capability.
//!
//! `head`/`tail`/`last` use unchecked access. For every input the fuzzer
//! produces, they must agree with the checked std equivalents.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lightcap::NonEmpty;

fuzz_target!(|data: &[u8]| {
    match NonEmpty::from_slice(data) {
        None => assert!(data.is_empty()),
        Some(ne) => {
            let (head, tail) = data.split_first().expect("non-empty");
            assert_eq!(ne.head(), head);
            assert_eq!(ne.tail(), tail);
            assert_eq!(Some(ne.last()), data.last());
            assert_eq!(ne.len().get(), data.len());
            assert!(std::ptr::eq(ne.as_slice(), data));
        }
    }
});
