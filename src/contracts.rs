// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the trust kernel.
//!
//! The kernel never re-checks what a capability already guarantees. These
//! functions re-check it anyway, but only in debug builds (`debug_assert!`),
//! so tests and fuzzing catch a kernel bug at the faulty call instead of as
//! memory corruption later. Release builds compile them to nothing.
//!
//! The one contract that stays on in release is the scope guard in
//! [`crate::bounded::with_len`]. Nothing here needs to: the violation an
//! unconditional check would catch at run time, storage changing under a live
//! capability, does not compile, because every capability holds a shared
//! borrow of its storage. What is left to catch is a bug inside the kernel
//! itself.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract            | Guards                                          |
//! |---------------------|-------------------------------------------------|
//! | `check_non_empty`   | `NonEmpty::head`, `tail`, `last`, `len`         |
//! | `check_in_bounds`   | `Scope::cmp`, `Indexed::get`                    |
//! | `check_midpoint`    | `Scope::middle`                                 |
//! | `check_sorted`      | `SortedVec::new`, `SortedSlice` consumers       |

use crate::kernel::bounded::MAX_SCOPE_LEN;

// Evaluated at build time: the largest admitted scope can add its last index
// to itself without overflowing.
const _: () = {
    // INVARIANT: midpoint_no_overflow
    assert!((MAX_SCOPE_LEN - 1).checked_add(MAX_SCOPE_LEN - 1).is_some());
    // INVARIANT: guard_matches_half (last admitted index is below usize::MAX / 2)
    assert!(MAX_SCOPE_LEN - 1 < usize::MAX / 2);
};

/// The slice behind a non-empty capability really is non-empty.
#[inline]
pub fn check_non_empty<T>(slice: &[T]) {
    debug_assert!(
        !slice.is_empty(),
        "Contract violation: NonEmpty - capability wraps an empty slice"
    );
}

/// An index handed out by a scope lies inside it.
#[inline]
pub fn check_in_bounds(index: usize, len: usize) {
    debug_assert!(
        index < len,
        "Contract violation: Index - {} >= scope length {}",
        index,
        len
    );
}

/// Both midpoint operands are valid and their sum fits.
#[inline]
pub fn check_midpoint(lo: usize, hi: usize, len: usize) {
    check_in_bounds(lo, len);
    check_in_bounds(hi, len);
    debug_assert!(
        lo.checked_add(hi).is_some(),
        "Contract violation: middle - {} + {} overflows",
        lo,
        hi
    );
}

/// Adjacent elements are in ascending order.
#[inline]
pub fn check_sorted<T: Ord>(slice: &[T]) {
    debug_assert!(
        first_unsorted(slice).is_none(),
        "Contract violation: Sorted - element {} is out of order",
        first_unsorted(slice).unwrap_or(0)
    );
}

/// Position of the first element smaller than its predecessor.
pub fn first_unsorted<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|pair| pair[0] > pair[1])
        .map(|i| i + 1)
}
