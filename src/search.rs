// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over branded indices.
//!
//! This module contains no `unsafe` and no bounds checks. Every index it reads
//! through comes out of [`Scope::cmp`] or [`Scope::middle`], so the element
//! fetch in the loop is the kernel's unchecked read, justified by the type of
//! the index rather than by a comparison here.
//!
//! The loop state is just `(Lo, Hi)`; each step either finishes or narrows one
//! bound with `succ`/`pred`, and `cmp` is the only place the two are compared.
//! O(log N) comparisons, no allocation.

use crate::kernel::bounded::{with_slice, Hi, Lo};
use std::cmp::Ordering;
use std::ops::ControlFlow;

/// Find an element of `sorted` that compares equal to `key`.
///
/// `compare(key, x)` must be a total order consistent with how `sorted` is
/// ascending. Returns the index and a reference to the element, or `None` if
/// no element matches. With duplicates, any matching index may be returned.
///
/// ```
/// use lightcap::search_by;
///
/// let xs = [1, 3, 5, 7, 9, 11];
/// assert_eq!(search_by(&xs, &7, |k, x| k.cmp(x)), Some((3, &7)));
/// assert_eq!(search_by(&xs, &4, |k, x| k.cmp(x)), None);
/// ```
pub fn search_by<'a, T, K, F>(sorted: &'a [T], key: &K, mut compare: F) -> Option<(usize, &'a T)>
where
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    with_slice(sorted, |arr| {
        let scope = arr.scope();
        let mut lo: Lo<'_> = scope.init_lo();
        let mut hi: Hi<'_> = scope.init_hi();

        loop {
            let step = scope.cmp(
                lo,
                hi,
                || ControlFlow::Break(None),
                |l, h| {
                    let mid = scope.middle(l, h);
                    let x = arr.get(mid);
                    tracing::trace!("search step lo={} hi={} mid={}", l, h, mid);
                    match compare(key, x) {
                        Ordering::Less => ControlFlow::Continue((lo, scope.pred(mid))),
                        Ordering::Equal => ControlFlow::Break(Some((mid.get(), x))),
                        Ordering::Greater => ControlFlow::Continue((scope.succ(mid), hi)),
                    }
                },
            );

            match step {
                ControlFlow::Break(found) => return found,
                ControlFlow::Continue((next_lo, next_hi)) => {
                    lo = next_lo;
                    hi = next_hi;
                }
            }
        }
    })
}

/// [`search_by`] with the element type's own order.
pub fn search<'a, T: Ord>(sorted: &'a [T], key: &T) -> Option<(usize, &'a T)> {
    search_by(sorted, key, |k, x| k.cmp(x))
}

/// First position whose element is not less than `key` (the insertion point).
///
/// Same scope operations as [`search_by`]; the answer is the lower bound left
/// behind when the range is exhausted.
///
/// ```
/// use lightcap::lower_bound_by;
///
/// let xs = [10, 20, 20, 30];
/// assert_eq!(lower_bound_by(&xs, &20, |k, x| k.cmp(x)), 1);
/// assert_eq!(lower_bound_by(&xs, &25, |k, x| k.cmp(x)), 3);
/// assert_eq!(lower_bound_by(&xs, &99, |k, x| k.cmp(x)), 4);
/// ```
pub fn lower_bound_by<T, K, F>(sorted: &[T], key: &K, mut compare: F) -> usize
where
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    with_slice(sorted, |arr| {
        let scope = arr.scope();
        let mut lo = scope.init_lo();
        let mut hi = scope.init_hi();

        loop {
            let step = scope.cmp(
                lo,
                hi,
                || ControlFlow::Break(lo.position()),
                |l, h| {
                    let mid = scope.middle(l, h);
                    match compare(key, arr.get(mid)) {
                        Ordering::Greater => ControlFlow::Continue((scope.succ(mid), hi)),
                        Ordering::Less | Ordering::Equal => {
                            ControlFlow::Continue((lo, scope.pred(mid)))
                        }
                    }
                },
            );

            match step {
                ControlFlow::Break(position) => return position,
                ControlFlow::Continue((next_lo, next_hi)) => {
                    lo = next_lo;
                    hi = next_hi;
                }
            }
        }
    })
}

/// [`lower_bound_by`] with the element type's own order.
pub fn lower_bound<T: Ord>(sorted: &[T], key: &T) -> usize {
    lower_bound_by(sorted, key, |k, x| k.cmp(x))
}
