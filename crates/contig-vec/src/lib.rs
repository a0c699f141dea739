// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous vector with an explicit relocation policy.
//!
//! [`Vector<T, R>`] is built from two layers:
//!
//! - [`RawStorage<T>`](contig_raw::RawStorage) owns uninitialized capacity and
//!   only knows how to allocate and release it;
//! - `Vector` owns one such block plus a live count, and is solely responsible
//!   for constructing and dropping the elements in it.
//!
//! # Core Guarantees
//!
//! - **Strong append**: when the block is full, the new element is built in
//!   the new block before any existing element is relocated; if it fails the
//!   vector is untouched
//! - **Strong insertion**: a mid-vector insertion either builds its value off
//!   to the side (spare capacity) or runs a staged migration that discards
//!   exactly what it built on failure (no spare capacity)
//! - **Strong reserve**: allocator failure leaves the vector as it was
//! - **Explicit relocation policy**: [`Bitwise`] moves elements (cannot fail),
//!   [`Cloned`] clones them and drops the originals only once the migration
//!   commits
//!
//! Failures come from two places only: the allocator ([`StorageError`]) and
//! element constructors, which may panic or, in the `try_*` variants, return
//! an error ([`EmplaceError::Construct`]).
//!
//! # Growth
//!
//! A full vector grows to `1` slot when empty and to `2 * len` otherwise.
//!
//! ```rust
//! use contig_vec::Vector;
//!
//! let mut vec = Vector::with_capacity(3);
//! vec.extend([1, 2, 3]);
//!
//! vec.insert(1, 9);
//! assert_eq!(vec, [1, 9, 2, 3]);
//! assert_eq!(vec.capacity(), 6);
//! ```
//!
//! # Example: Fallible Construction
//!
//! ```rust
//! use contig_vec::{EmplaceError, Vector};
//!
//! let mut vec = Vector::new();
//! vec.push_back(String::from("a"));
//!
//! let result = vec.try_emplace_with(0, || Err::<String, _>("refused"));
//! assert_eq!(result, Err(EmplaceError::Construct("refused")));
//!
//! assert_eq!(vec.len(), 1);
//! assert_eq!(vec[0], "a");
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! contig-vec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`VectorBehaviour`] to test error scenarios.
//!
//! # Logging
//!
//! Every storage migration emits a `tracing` event at `TRACE` level, and every
//! rolled back migration one at `DEBUG` level. No subscriber is installed.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod assign;
#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
mod error;
mod growth;
mod guard;
mod into_iter;
mod positional;
mod relocate;
mod vector;

#[cfg(test)]
mod tests;

pub use contig_raw::StorageError;
pub use error::EmplaceError;
pub use into_iter::IntoIter;
pub use relocate::{Bitwise, Cloned, Relocate};
pub use vector::Vector;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::VectorBehaviour;
