// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity blocks of uninitialized memory.
//!
//! [`RawStorage<T>`] owns a block sized for `capacity` values of `T` and nothing
//! else: it allocates on creation and deallocates on drop, but never reads,
//! writes or drops the values that may live inside it. Tracking which slots are
//! initialized is the job of the container built on top of it.
//!
//! # Core Guarantees
//!
//! - **All or nothing**: [`RawStorage::allocate`] either returns a complete
//!   block or an error, never a partially usable one
//! - **Move-only**: a block cannot be cloned, duplicating bytes without
//!   duplicating the values they encode is meaningless
//! - **No allocation for empty blocks**: capacity `0` and zero-sized `T`
//!   never touch the allocator
//!
//! # Example
//!
//! ```rust
//! use contig_raw::{RawStorage, StorageError};
//!
//! fn example() -> Result<(), StorageError> {
//!     let storage = RawStorage::<u32>::allocate(4)?;
//!     assert_eq!(storage.capacity(), 4);
//!
//!     // SAFETY: slot 0 is inside the block and we never read it uninitialized.
//!     unsafe {
//!         storage.slot(0).write(7);
//!         assert_eq!(storage.slot(0).read(), 7);
//!     }
//!
//!     // One past the end is a valid address for iteration, not a slot.
//!     let _end = storage.offset(4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod raw_storage;

#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use raw_storage::RawStorage;
