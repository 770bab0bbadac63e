// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recoverable capability errors.
//!
//! Most constructors report a failed check as `None`. The `TryFrom` impls,
//! serde deserialization and [`crate::bounded::try_with_len`] need a real
//! error value, and this is it. Kernel contract violations are never
//! represented here: those panic.

use std::fmt;

/// Why a capability could not be established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// A non-empty capability was requested for an empty sequence.
    Empty,
    /// A bounded scope was requested for a length whose midpoints could overflow.
    ScopeTooLarge { len: usize, max: usize },
    /// A sortedness capability was requested for data out of order.
    Unsorted { position: usize },
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityError::Empty => write!(f, "sequence is empty"),
            CapabilityError::ScopeTooLarge { len, max } => {
                write!(f, "scope length {} exceeds maximum {}", len, max)
            }
            CapabilityError::Unsorted { position } => {
                write!(
                    f,
                    "sequence not sorted: element {} is smaller than its predecessor",
                    position
                )
            }
        }
    }
}

impl std::error::Error for CapabilityError {}
