// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The kernel of trust.
//!
//! This directory is the only place in the crate where `unsafe` is allowed
//! (`cargo xtask audit` enforces it). Everything in here follows one pattern:
//! a single constructor performs the one runtime check, and every other
//! operation on the resulting capability uses unchecked access that would be
//! unsound on arbitrary data but is sound on values the constructor admitted.
//!
//! | Capability        | Established by             | Unchecked operations it unlocks |
//! |-------------------|----------------------------|---------------------------------|
//! | `NonEmpty`        | `NonEmpty::from_slice`     | `head`, `tail`, `last`, `len`   |
//! | `NonEmptyVec`     | `NonEmptyVec::from_vec`    | same, via `as_nonempty`         |
//! | `Index<'id>`      | `Scope::cmp`, `Scope::check` | `Indexed::get`                |
//!
//! An auditor reviews these two files and nothing else. Code outside the
//! kernel (search, sorted containers, the CLI) is ordinary safe Rust that can
//! only reach the unchecked paths through the capability types.

#![allow(unsafe_code)]

pub mod bounded;
pub mod nonempty;
