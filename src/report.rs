// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What an auditor has to trust.
//!
//! The report lists each capability, the invariant it certifies, where that
//! invariant is established, and the unchecked operations that rely on it.
//! The `lightcap report` command prints it; `cargo xtask audit` checks the
//! source tree agrees with the "kernel files" list.

use serde::Serialize;

/// One capability and the trust it carries.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityEntry {
    pub name: &'static str,
    pub invariant: &'static str,
    pub established_by: &'static str,
    pub unchecked_operations: Vec<&'static str>,
}

/// Summary of the trust kernel.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityReport {
    /// Source files allowed to contain `unsafe`.
    pub kernel_files: Vec<&'static str>,
    pub capabilities: Vec<CapabilityEntry>,
}

impl CapabilityReport {
    /// Build the report for the current codebase.
    pub fn generate() -> Self {
        Self {
            kernel_files: vec!["src/kernel/nonempty.rs", "src/kernel/bounded.rs"],
            capabilities: vec![
                CapabilityEntry {
                    name: "NonEmpty / NonEmptyVec",
                    invariant: "len >= 1",
                    established_by: "NonEmpty::from_slice, NonEmptyVec::from_vec",
                    unchecked_operations: vec!["head", "tail", "last", "len"],
                },
                CapabilityEntry {
                    name: "Scope<'id>",
                    invariant: "len - 1 < usize::MAX / 2",
                    established_by: "bounded::with_len, bounded::with_slice (fatal on violation)",
                    unchecked_operations: vec!["Scope::middle"],
                },
                CapabilityEntry {
                    name: "Index<'id>",
                    invariant: "0 <= i <= len - 1",
                    established_by: "Scope::cmp, Scope::middle, Scope::check",
                    unchecked_operations: vec!["Indexed::get"],
                },
                CapabilityEntry {
                    name: "SortedVec / SortedSlice",
                    invariant: "ascending order",
                    established_by: "SortedVec::new (sorts), SortedSlice::new (validates)",
                    unchecked_operations: vec![],
                },
            ],
        }
    }

    /// Total number of unchecked operations across all capabilities.
    pub fn unchecked_count(&self) -> usize {
        self.capabilities
            .iter()
            .map(|c| c.unchecked_operations.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_generates() {
        let report = CapabilityReport::generate();
        assert_eq!(report.kernel_files.len(), 2);
        assert_eq!(report.capabilities.len(), 4);
        assert_eq!(report.unchecked_count(), 6);
    }
}
