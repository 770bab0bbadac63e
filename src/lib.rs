// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lightweight static capabilities.
//!
//! A handful of unchecked operations live in a small kernel of trust. The rest
//! of the program reaches them only through types whose mere possession
//! certifies an invariant: a [`NonEmpty`] slice has a head, an
//! [`bounded::Index`] is in bounds, a [`SortedVec`] is in order. Each
//! invariant is checked exactly once, by the constructor; after that the type
//! system carries the proof and nothing re-checks it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── kernel (unsafe allowed) ────────────────────┐
//! │  nonempty.rs                          bounded.rs                        │
//! │  NonEmpty, NonEmptyVec                Scope<'id>, Index<'id>, Lo, Hi    │
//! │  head / tail / last  (unchecked)      Indexed::get        (unchecked)   │
//! └───────────────▲───────────────────────────────────▲─────────────────────┘
//!                 │                                   │
//!                 │                         ┌─────────┴─────────┐
//!                 │                         │    search.rs      │
//!                 │                         │ search_by,        │
//!                 │                         │ lower_bound_by    │
//!                 │                         └─────────▲─────────┘
//!                 │                                   │
//!           caller code                     ┌─────────┴─────────┐
//!                                           │    sorted.rs      │
//!                                           │ SortedVec,        │
//!                                           │ SortedSlice       │
//!                                           └───────────────────┘
//! ```
//!
//! `contracts` re-checks the kernel's assumptions in debug builds only.
//!
//! # Usage
//!
//! ```
//! use lightcap::{search, NonEmpty, SortedVec};
//!
//! let ne = NonEmpty::from_slice(&[4, 8, 15]).expect("non-empty");
//! assert_eq!(*ne.head(), 4);
//!
//! let sorted = SortedVec::new(vec![3, 1, 2]);
//! assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
//!
//! assert_eq!(search(&[1, 3, 5, 7, 9, 11], &7), Some((3, &7)));
//! ```

pub mod contracts;
mod error;
mod kernel;
pub mod report;
mod search;
mod sorted;
pub mod testing;

/// Branded indices and scopes.
pub mod bounded {
    pub use crate::kernel::bounded::*;
}

pub use error::CapabilityError;
pub use kernel::nonempty::{NonEmpty, NonEmptyVec};
pub use report::CapabilityReport;
pub use search::{lower_bound, lower_bound_by, search, search_by};
pub use sorted::{SortedSlice, SortedVec};
