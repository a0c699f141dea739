// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in `Vector` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to exercise allocation-failure paths without exhausting memory.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use contig_vec::{Vector, VectorBehaviour};
///
///     #[test]
///     fn test_handles_allocation_failure() {
///         let mut vec = Vector::<u8>::new();
///         vec.change_behaviour(VectorBehaviour::FailAtAllocate);
///
///         assert!(vec.try_reserve(16).is_err());
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every storage allocation fails with `StorageError::AllocFailed`.
    FailAtAllocate,
}

impl Default for VectorBehaviour {
    fn default() -> Self {
        Self::None
    }
}
