//! Properties of bounded index scopes.

use lightcap::bounded::{admits, try_with_len, with_len, MAX_SCOPE_LEN};
use proptest::prelude::*;

proptest! {
    /// Property: check admits exactly 0..len
    #[test]
    fn prop_check_matches_range(len in 0usize..10_000, raw in 0usize..20_000) {
        let vetted = with_len(len, |scope| scope.check(raw).map(|i| i.get()));
        prop_assert_eq!(vetted, if raw < len { Some(raw) } else { None });
    }

    /// Property: middle stays within [lo, hi] for any admitted length
    #[test]
    fn prop_middle_between_bounds(len in 1usize..=MAX_SCOPE_LEN, a in any::<usize>(), b in any::<usize>()) {
        let (lo, hi) = { let (x, y) = (a % len, b % len); (x.min(y), x.max(y)) };
        let mid = with_len(len, |scope| {
            let lo = scope.check(lo).unwrap();
            let hi = scope.check(hi).unwrap();
            scope.middle(lo, hi).get()
        });
        prop_assert!(lo <= mid && mid <= hi);
        prop_assert_eq!(mid, lo + (hi - lo) / 2);
    }

    /// Property: the fallible constructor agrees with the guard
    #[test]
    fn prop_try_with_len_matches_guard(len in any::<usize>()) {
        prop_assert_eq!(try_with_len(len, |_| ()).is_ok(), admits(len));
    }
}
