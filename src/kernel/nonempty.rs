// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Non-empty sequences.
//!
//! `NonEmpty<'a, T>` is a borrowed view: it is literally a `&'a [T]` that has
//! been checked once. `NonEmptyVec<T>` is the owned counterpart and has the
//! same representation as the `Vec<T>` it was built from. Neither copies the
//! elements; trust is transferred, not data.
//!
//! ```
//! use lightcap::NonEmpty;
//!
//! let words = ["alpha", "beta", "gamma"];
//! let ne = NonEmpty::from_slice(&words).unwrap();
//!
//! // No Option here: the constructor already proved there is a first element.
//! assert_eq!(*ne.head(), "alpha");
//! assert_eq!(ne.tail(), &["beta", "gamma"]);
//!
//! assert!(NonEmpty::<u8>::from_slice(&[]).is_none());
//! ```

use crate::contracts::check_non_empty;
use crate::error::CapabilityError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;

/// A slice with at least one element.
///
/// # Invariants (enforced at construction)
/// - `slice.len() >= 1`
#[derive(PartialEq, Eq, Hash)]
pub struct NonEmpty<'a, T> {
    slice: &'a [T],
}

// Manual impls: a shared view is copyable whether or not `T` is.
impl<T> Clone for NonEmpty<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NonEmpty<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NonEmpty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NonEmpty").field(&self.slice).finish()
    }
}

impl<'a, T> NonEmpty<'a, T> {
    /// Check `slice` once and return the capability, or `None` if it is empty.
    ///
    /// This is the only runtime emptiness check the capability ever performs.
    #[inline]
    pub fn from_slice(slice: &'a [T]) -> Option<Self> {
        if slice.is_empty() {
            None
        } else {
            Some(Self { slice })
        }
    }

    /// The underlying slice, unchanged.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// The first element. Total.
    #[inline]
    pub fn head(&self) -> &'a T {
        check_non_empty(self.slice);
        // SAFETY: `from_slice` rejected empty slices, so index 0 is in bounds.
        unsafe { self.slice.get_unchecked(0) }
    }

    /// Everything after the first element (possibly empty). Total.
    #[inline]
    pub fn tail(&self) -> &'a [T] {
        check_non_empty(self.slice);
        // SAFETY: len >= 1, so `1..` is a valid (possibly empty) range.
        unsafe { self.slice.get_unchecked(1..) }
    }

    /// The last element. Total.
    #[inline]
    pub fn last(&self) -> &'a T {
        check_non_empty(self.slice);
        // SAFETY: len >= 1, so len - 1 neither underflows nor exceeds the bounds.
        unsafe { self.slice.get_unchecked(self.slice.len() - 1) }
    }

    /// `(head, tail)` in one call.
    #[inline]
    pub fn split_first(&self) -> (&'a T, &'a [T]) {
        (self.head(), self.tail())
    }

    /// Number of elements, statically non-zero.
    #[inline]
    pub fn len(&self) -> NonZeroUsize {
        check_non_empty(self.slice);
        // SAFETY: len >= 1 by construction.
        unsafe { NonZeroUsize::new_unchecked(self.slice.len()) }
    }

    /// Iterate over all elements.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.slice.iter()
    }
}

impl<'a, T> TryFrom<&'a [T]> for NonEmpty<'a, T> {
    type Error = CapabilityError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        Self::from_slice(slice).ok_or(CapabilityError::Empty)
    }
}

impl<'a, T> IntoIterator for NonEmpty<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<T> AsRef<[T]> for NonEmpty<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.slice
    }
}

/// An owned vector with at least one element.
///
/// Same layout as the `Vec<T>` it wraps. Growth is allowed (it cannot break
/// the invariant); removal is not offered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    vec: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Take ownership of `vec` if it is non-empty.
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            Some(Self { vec })
        }
    }

    /// Build from a head and the rest. Needs no check at all.
    pub fn from_head_and_tail(head: T, tail: impl IntoIterator<Item = T>) -> Self {
        let mut vec = vec![head];
        vec.extend(tail);
        Self { vec }
    }

    /// Borrow as a `NonEmpty` view. The invariant carries over without a check.
    #[inline]
    pub fn as_nonempty(&self) -> NonEmpty<'_, T> {
        NonEmpty { slice: &self.vec }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// Give up the capability and return the original vector.
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }

    pub fn head(&self) -> &T {
        self.as_nonempty().head()
    }

    pub fn tail(&self) -> &[T] {
        self.as_nonempty().tail()
    }

    pub fn last(&self) -> &T {
        self.as_nonempty().last()
    }

    pub fn len(&self) -> NonZeroUsize {
        self.as_nonempty().len()
    }

    pub fn push(&mut self, value: T) {
        self.vec.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = CapabilityError;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(vec).ok_or(CapabilityError::Empty)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(ne: NonEmptyVec<T>) -> Self {
        ne.vec
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl<T> AsRef<[T]> for NonEmptyVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.vec
    }
}

// Serialized as a plain sequence.
impl<T: Serialize> Serialize for NonEmptyVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.vec.serialize(serializer)
    }
}

// Deserialization goes through the constructor; `[]` is rejected.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let vec = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(vec).map_err(serde::de::Error::custom)
    }
}
