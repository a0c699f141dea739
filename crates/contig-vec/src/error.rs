// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for contig-vec.

use core::convert::Infallible;

use contig_raw::StorageError;
use thiserror::Error;

/// Error returned by the fallible `try_emplace*` operations.
///
/// Whichever variant is returned, the vector is left exactly as it was before
/// the call.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum EmplaceError<E> {
    /// Growing the storage failed. The constructor was not called.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The element constructor returned an error.
    #[error("element construction failed: {0}")]
    Construct(E),
}

impl EmplaceError<Infallible> {
    /// Diverges on the storage failure; the constructor cannot have failed.
    pub(crate) fn handle(self) -> ! {
        match self {
            Self::Storage(e) => e.handle(),
            Self::Construct(never) => match never {},
        }
    }
}
