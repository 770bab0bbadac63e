// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the bounded-scope arithmetic.
//!
//! The main crate's `Scope` stores `Lo` as a position and `Hi` as an
//! exclusive end. This crate restates exactly those operations over `usize`
//! and proves them for every input Kani can produce.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No overflow**: `middle` never overflows for any admitted scope length
//! 2. **In range**: every index produced by `cmp`/`middle` is `< len`
//! 3. **Progress**: each search step strictly shrinks `hi - lo`
//! 4. **Search**: the full loop never reads out of bounds and finds present keys

/// Largest admitted scope length (mirrors `lightcap::bounded::MAX_SCOPE_LEN`).
pub const MAX_SCOPE_LEN: usize = usize::MAX / 2;

// ============================================================================
// SCOPE ARITHMETIC (restated from src/kernel/bounded.rs)
// ============================================================================

pub fn admits(len: usize) -> bool {
    len <= MAX_SCOPE_LEN
}

/// `Some((lo, hi_inclusive))` when the range is non-empty.
pub fn cmp(lo: usize, hi_end: usize) -> Option<(usize, usize)> {
    if lo >= hi_end {
        None
    } else {
        Some((lo, hi_end - 1))
    }
}

pub fn middle(lo: usize, hi: usize) -> usize {
    (lo + hi) / 2
}

pub fn succ(index: usize) -> usize {
    index + 1
}

pub fn pred(index: usize) -> usize {
    index
}

/// The bounded search loop over plain integers.
pub fn search(sorted: &[u8], key: u8) -> Option<usize> {
    if !admits(sorted.len()) {
        return None;
    }
    let mut lo = 0;
    let mut hi_end = sorted.len();
    while let Some((l, h)) = cmp(lo, hi_end) {
        let m = middle(l, h);
        let x = sorted[m];
        if key < x {
            hi_end = pred(m);
        } else if key == x {
            return Some(m);
        } else {
            lo = succ(m);
        }
    }
    None
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// `lo + hi` cannot overflow once the scope guard holds.
    #[kani::proof]
    fn proof_middle_no_overflow() {
        let len: usize = kani::any();
        let lo: usize = kani::any();
        let hi: usize = kani::any();
        kani::assume(admits(len));
        kani::assume(lo < len && hi < len);

        let m = middle(lo, hi);
        assert!(m < len);
        if lo <= hi {
            assert!(lo <= m && m <= hi);
        }
    }

    /// `cmp` only hands out indices inside the scope.
    #[kani::proof]
    fn proof_cmp_in_range() {
        let len: usize = kani::any();
        let lo: usize = kani::any();
        let hi_end: usize = kani::any();
        kani::assume(admits(len));
        kani::assume(lo <= len && hi_end <= len);

        if let Some((l, h)) = cmp(lo, hi_end) {
            assert!(l < len);
            assert!(h < len);
            assert!(l <= h);
        }
    }

    /// Each narrowing step makes the range strictly smaller.
    #[kani::proof]
    fn proof_step_progress() {
        let len: usize = kani::any();
        let lo: usize = kani::any();
        let hi_end: usize = kani::any();
        kani::assume(admits(len));
        kani::assume(lo <= len && hi_end <= len);

        if let Some((l, h)) = cmp(lo, hi_end) {
            let m = middle(l, h);
            let width = hi_end - lo;
            assert!(pred(m) - lo < width);
            assert!(hi_end.saturating_sub(succ(m)) < width);
        }
    }

    /// The whole loop on small arrays: no panic, and sorted hits are found.
    #[kani::proof]
    #[kani::unwind(6)]
    fn proof_search_small_arrays() {
        let data: [u8; 4] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= 4);
        let sorted = &data[..len];
        kani::assume(sorted.windows(2).all(|w| w[0] <= w[1]));
        let key: u8 = kani::any();

        match search(sorted, key) {
            Some(i) => assert!(sorted[i] == key),
            None => assert!(!sorted.contains(&key)),
        }
    }
}
