// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sortedness capabilities.
//!
//! Sortedness is a property of content, not shape, so a view over someone
//! else's storage cannot keep it: the owner could reorder the data behind our
//! back. Two answers:
//!
//! - [`SortedVec`] owns a private copy, sorted once at construction. Callers
//!   get fresh copies ([`SortedVec::to_vec`]) or shared borrows, never a way to
//!   mutate the storage.
//! - [`SortedSlice`] validates (does not sort) a borrowed slice. The shared
//!   borrow freezes the data for as long as the capability lives.
//!
//! Both feed [`crate::search`] without leaving a sortedness precondition to the
//! caller.

use crate::contracts::{check_sorted, first_unsorted};
use crate::error::CapabilityError;
use crate::search::{lower_bound, search};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An owned collection kept in ascending order for its whole lifetime.
///
/// # Invariants (enforced at construction)
/// - `vec[i] <= vec[i + 1]` for all adjacent pairs
/// - `vec` is never aliased by anything outside this value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedVec<T> {
    vec: Vec<T>,
}

impl<T: Ord> SortedVec<T> {
    /// Take ownership of `vec` and sort it.
    ///
    /// Taking `Vec<T>` by value is the defensive copy: the caller has nothing
    /// left to mutate.
    pub fn new(mut vec: Vec<T>) -> Self {
        vec.sort();
        check_sorted(&vec);
        tracing::debug!("sorted container established over {} elements", vec.len());
        Self { vec }
    }

    /// Copy `slice` into private storage and sort the copy.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(slice.to_vec())
    }

    /// A fresh copy of the contents, in ascending order.
    ///
    /// The returned vector shares no storage with `self`; mutating it has no
    /// effect on later reads.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.vec.clone()
    }

    /// Borrow the sorted contents.
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// The same guarantee, as a borrowed [`SortedSlice`]. No re-validation.
    pub fn as_sorted_slice(&self) -> SortedSlice<'_, T> {
        SortedSlice { slice: &self.vec }
    }

    /// Give up the capability.
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Smallest element.
    pub fn first(&self) -> Option<&T> {
        self.vec.first()
    }

    /// Largest element.
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Bounded binary search; see [`crate::search()`].
    pub fn search(&self, key: &T) -> Option<(usize, &T)> {
        search(&self.vec, key)
    }

    /// Insertion point for `key`; see [`crate::lower_bound()`].
    pub fn lower_bound(&self, key: &T) -> usize {
        lower_bound(&self.vec, key)
    }

    pub fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }
}

impl<T: Ord> From<Vec<T>> for SortedVec<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::new(vec)
    }
}

impl<T: Ord> FromIterator<T> for SortedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> From<SortedVec<T>> for Vec<T> {
    fn from(sorted: SortedVec<T>) -> Self {
        sorted.vec
    }
}

impl<T> AsRef<[T]> for SortedVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.vec
    }
}

impl<'a, T> IntoIterator for &'a SortedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl<T: Serialize> Serialize for SortedVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.vec.serialize(serializer)
    }
}

// Input order is never trusted: deserializing sorts.
impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for SortedVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}

/// A borrowed slice that has been checked to be in ascending order.
///
/// # Invariants (enforced at construction)
/// - `slice[i] <= slice[i + 1]` for all adjacent pairs
#[derive(Debug, PartialEq, Eq)]
pub struct SortedSlice<'a, T> {
    slice: &'a [T],
}

impl<T> Clone for SortedSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortedSlice<'_, T> {}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Check `slice` once; `None` if any element is smaller than its predecessor.
    pub fn new(slice: &'a [T]) -> Option<Self> {
        Self::validate(slice).ok()
    }

    /// Like [`SortedSlice::new`], reporting where the order breaks.
    pub fn validate(slice: &'a [T]) -> Result<Self, CapabilityError> {
        match first_unsorted(slice) {
            Some(position) => Err(CapabilityError::Unsorted { position }),
            None => Ok(Self { slice }),
        }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Bounded binary search; see [`crate::search()`].
    pub fn search(&self, key: &T) -> Option<(usize, &'a T)> {
        search(self.slice, key)
    }

    pub fn lower_bound(&self, key: &T) -> usize {
        lower_bound(self.slice, key)
    }

    /// Copy into an owned [`SortedVec`]. Already in order, so no re-sort.
    pub fn to_sorted_vec(&self) -> SortedVec<T>
    where
        T: Clone,
    {
        SortedVec {
            vec: self.slice.to_vec(),
        }
    }
}

impl<'a, T: Ord> TryFrom<&'a [T]> for SortedSlice<'a, T> {
    type Error = CapabilityError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        Self::validate(slice)
    }
}
