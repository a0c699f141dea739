// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig-raw.

use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur when acquiring a storage block.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StorageError {
    /// The requested capacity does not fit in a valid layout.
    ///
    /// Either `capacity * size_of::<T>()` overflows `usize` or the block would
    /// exceed `isize::MAX` bytes.
    #[error("capacity overflow: requested block exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The global allocator could not provide a block for `layout`.
    #[error("allocation of {} bytes (align {}) failed", .layout.size(), .layout.align())]
    AllocFailed {
        /// Layout of the block that was requested.
        layout: Layout,
    },
}

impl StorageError {
    /// Diverges the way `alloc::vec::Vec` does on the same failure.
    ///
    /// [`StorageError::CapacityOverflow`] panics with `"capacity overflow"`;
    /// [`StorageError::AllocFailed`] calls [`alloc::alloc::handle_alloc_error`].
    #[cold]
    #[inline(never)]
    pub fn handle(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
        }
    }
}
