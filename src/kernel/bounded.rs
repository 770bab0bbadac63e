// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Branded, bounds-checked-once indices.
//!
//! A [`Scope<'id>`] is minted for one fixed length `N` by [`with_len`] (or
//! [`with_slice`], which also pairs it with storage). The `'id` lifetime is
//! chosen fresh by a higher-ranked closure, so it is a nominal type unique to
//! that scope: an [`Index<'id>`] from one scope cannot be used with another,
//! and none can escape the closure.
//!
//! Every `Index<'id>` satisfies `0 <= i <= N - 1`. Indices are only produced
//! inside this file, by operations that preserve that range:
//!
//! - [`Scope::cmp`] turns a `(Lo, Hi)` pair into two indices, and is the only
//!   place the two bounds are compared.
//! - [`Scope::middle`] averages two indices; the scope-creation guard
//!   `N - 1 < usize::MAX / 2` rules out overflow in `lo + hi`.
//! - [`Scope::check`] vets an untrusted integer.
//!
//! `Lo` and `Hi` are bounds, not indices. They may sit one past either end of
//! the array and are never dereferenced; the only thing to do with them is hand
//! them back to `cmp`. The distinct marker types stop a lower bound from being
//! passed where an upper bound is expected.
//!
//! An index cannot leave its scope:
//!
//! ```compile_fail
//! let leaked = lightcap::bounded::with_len(3, |scope| scope.init_lo());
//! ```
//!
//! and cannot be used on another array:
//!
//! ```compile_fail
//! use lightcap::bounded::with_slice;
//!
//! let a = [1, 2, 3];
//! let b = [4, 5];
//! with_slice(&a, |a| {
//!     with_slice(&b, |b| {
//!         let i = a.scope().check(0).unwrap();
//!         *b.get(i)
//!     })
//! });
//! ```

use crate::contracts::{check_in_bounds, check_midpoint};
use crate::error::CapabilityError;
use std::fmt;
use std::marker::PhantomData;

/// Largest length a scope admits.
///
/// For any `len <= MAX_SCOPE_LEN`, `len - 1 < usize::MAX / 2`, so the sum of
/// two valid indices fits in a `usize`.
pub const MAX_SCOPE_LEN: usize = usize::MAX / 2;

/// Invariant lifetime marker: `'id` can neither shrink nor grow.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
struct Brand<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

/// Marker for a lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lower {}

/// Marker for an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upper {}

/// An index into the array of scope `'id`.
///
/// # Invariants
/// - `0 <= raw <= N - 1` where `N` is the scope's length
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index<'id> {
    raw: usize,
    brand: Brand<'id>,
}

impl Index<'_> {
    /// The plain integer value. Safe to expose: it is a copy, and turning it
    /// back into an `Index` goes through [`Scope::check`].
    #[inline]
    pub fn get(self) -> usize {
        self.raw
    }
}

impl fmt::Debug for Index<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index({})", self.raw)
    }
}

impl fmt::Display for Index<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// A search bound of scope `'id`, tagged with which side it bounds.
///
/// Representation: a `Lo` stores the candidate position itself (`0..=N`); a
/// `Hi` stores one past the candidate (`0..=N`), so `init_hi` on an empty
/// array is "-1" without signed arithmetic.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Bound<'id, Side> {
    raw: usize,
    brand: Brand<'id>,
    side: PhantomData<Side>,
}

/// A lower search bound.
pub type Lo<'id> = Bound<'id, Lower>;

/// An upper search bound.
pub type Hi<'id> = Bound<'id, Upper>;

impl Lo<'_> {
    /// The position this bound points at, in `0..=N`.
    ///
    /// After a search is exhausted this is the insertion point.
    #[inline]
    pub fn position(self) -> usize {
        self.raw
    }
}

impl fmt::Debug for Lo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lo({})", self.raw)
    }
}

impl fmt::Debug for Hi<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shown inclusively, matching the abstract "hi" of the search.
        write!(f, "Hi({})", self.raw as isize - 1)
    }
}

/// The index capability generator for one array length.
#[derive(Clone, Copy)]
pub struct Scope<'id> {
    len: usize,
    brand: Brand<'id>,
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope").field("len", &self.len).finish()
    }
}

/// Whether a scope of `len` can exist without risking midpoint overflow.
#[inline]
pub const fn admits(len: usize) -> bool {
    len <= MAX_SCOPE_LEN
}

/// Mint a fresh scope for `len` and run `f` inside it.
///
/// # Panics
/// If `len - 1 >= usize::MAX / 2`. That is a kernel contract violation, not
/// an input error: such a scope cannot safely compute midpoints at all.
pub fn with_len<R>(len: usize, f: impl for<'id> FnOnce(Scope<'id>) -> R) -> R {
    assert!(
        admits(len),
        "Contract violation: bounded scope of length {} exceeds MAX_SCOPE_LEN {}",
        len,
        MAX_SCOPE_LEN
    );
    tracing::debug!("minting bounded scope for length {}", len);
    f(Scope {
        len,
        brand: Brand::default(),
    })
}

/// Like [`with_len`], but reports an oversized length instead of panicking.
pub fn try_with_len<R>(
    len: usize,
    f: impl for<'id> FnOnce(Scope<'id>) -> R,
) -> Result<R, CapabilityError> {
    if !admits(len) {
        return Err(CapabilityError::ScopeTooLarge {
            len,
            max: MAX_SCOPE_LEN,
        });
    }
    Ok(with_len(len, f))
}

/// Mint a scope for `slice.len()` and pair it with the slice.
///
/// # Panics
/// Same guard as [`with_len`]; only reachable with zero-sized element types.
pub fn with_slice<'a, T, R>(
    slice: &'a [T],
    f: impl for<'id> FnOnce(Indexed<'id, 'a, T>) -> R,
) -> R {
    with_len(slice.len(), |scope| f(Indexed { slice, scope }))
}

impl<'id> Scope<'id> {
    /// The length `N` this scope was minted for.
    #[inline]
    pub fn len(self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// `lo = 0`.
    #[inline]
    pub fn init_lo(self) -> Lo<'id> {
        self.bound(0)
    }

    /// `hi = N - 1` (so `-1` for an empty array).
    #[inline]
    pub fn init_hi(self) -> Hi<'id> {
        self.bound(self.len)
    }

    /// The single branch point of a bounded search.
    ///
    /// Calls `on_exhausted` if `lo > hi`. Otherwise both bounds are valid
    /// indices and `on_range(lo, hi)` receives them as such.
    #[inline]
    pub fn cmp<W>(
        self,
        lo: Lo<'id>,
        hi: Hi<'id>,
        on_exhausted: impl FnOnce() -> W,
        on_range: impl FnOnce(Index<'id>, Index<'id>) -> W,
    ) -> W {
        if lo.raw >= hi.raw {
            return on_exhausted();
        }
        // INVARIANT: lo.raw < hi.raw <= len, so hi.raw - 1 is in [lo.raw, len - 1].
        let last = hi.raw - 1;
        check_in_bounds(lo.raw, self.len);
        check_in_bounds(last, self.len);
        on_range(self.index(lo.raw), self.index(last))
    }

    /// `floor((lo + hi) / 2)`.
    #[inline]
    pub fn middle(self, lo: Index<'id>, hi: Index<'id>) -> Index<'id> {
        check_midpoint(lo.raw, hi.raw, self.len);
        // INVARIANT: lo, hi <= len - 1 < usize::MAX / 2, so the sum cannot overflow.
        self.index((lo.raw + hi.raw) / 2)
    }

    /// New lower bound just past `index`. May be `N` (exhausted on the right).
    #[inline]
    pub fn succ(self, index: Index<'id>) -> Lo<'id> {
        self.bound(index.raw + 1)
    }

    /// New upper bound just before `index`. May be `-1` (exhausted on the left).
    #[inline]
    pub fn pred(self, index: Index<'id>) -> Hi<'id> {
        self.bound(index.raw)
    }

    /// Vet an untrusted integer.
    #[inline]
    pub fn check(self, raw: usize) -> Option<Index<'id>> {
        if raw < self.len {
            Some(self.index(raw))
        } else {
            None
        }
    }

    /// All indices of the scope, in order.
    pub fn indices(self) -> impl Iterator<Item = Index<'id>> + Clone {
        (0..self.len).map(move |raw| self.index(raw))
    }

    // Private minting: callers in this file uphold the range invariants.
    #[inline]
    fn index(self, raw: usize) -> Index<'id> {
        Index {
            raw,
            brand: self.brand,
        }
    }

    #[inline]
    fn bound<Side>(self, raw: usize) -> Bound<'id, Side> {
        Bound {
            raw,
            brand: self.brand,
            side: PhantomData,
        }
    }
}

/// A slice together with the scope minted for its length.
pub struct Indexed<'id, 'a, T> {
    slice: &'a [T],
    scope: Scope<'id>,
}

impl<T> Clone for Indexed<'_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Indexed<'_, '_, T> {}

impl<T: fmt::Debug> fmt::Debug for Indexed<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Indexed").field(&self.slice).finish()
    }
}

impl<'id, 'a, T> Indexed<'id, 'a, T> {
    #[inline]
    pub fn scope(&self) -> Scope<'id> {
        self.scope
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// Read the element at `index`. Total.
    #[inline]
    pub fn get(&self, index: Index<'id>) -> &'a T {
        check_in_bounds(index.raw, self.slice.len());
        // SAFETY: every Index<'id> is < scope.len, and scope.len == slice.len()
        // because `with_slice` minted this scope from this slice. The shared
        // borrow `'a` keeps the length fixed for the scope's lifetime.
        unsafe { self.slice.get_unchecked(index.raw) }
    }
}
