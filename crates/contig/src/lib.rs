// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>A growable contiguous vector that keeps its promises when things fail.</em></p>
//!
//! ---
//!
//! Contig is a `Vec`-like container split into two layers: a raw block of
//! uninitialized capacity, and a vector that owns one block and the live
//! elements inside it. Growth, insertion and copy assignment are written so
//! that a failing allocator or a failing element constructor leaves the
//! vector exactly as it was.
//!
//! # Features
//!
//! - **Strong append and insertion**: new elements are built before existing
//!   ones are touched
//! - **Explicit relocation policy**: move elements bitwise, or clone them and
//!   drop the originals only when the migration commits
//! - **Fallible constructors**: `try_*` variants take `FnOnce() -> Result<T, E>`
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! contig = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use contig::vec::Vector;
//!
//! let mut vec = Vector::new();
//! vec.push_back(1);
//! vec.push_back(2);
//! vec.push_back(3);
//!
//! vec.insert(1, 9);
//! assert_eq!(vec, [1, 9, 2, 3]);
//! assert_eq!(vec.capacity(), 4);
//!
//! assert_eq!(vec.erase(0), 0);
//! assert_eq!(vec, [9, 2, 3]);
//! ```
//!
//! # Relocation policies
//!
//! ```rust
//! use contig::vec::{Cloned, Vector};
//!
//! let mut names = Vector::<String, Cloned>::with_policy();
//! names.push_back(String::from("a"));
//! names.push_back(String::from("b"));
//!
//! // Growing clones "a" and "b" into the new block, then drops the originals.
//! names.push_back(String::from("c"));
//! assert_eq!(names, ["a", "b", "c"]);
//! ```
//!
//! | Policy    | Relocation  | Can fail | Requires   |
//! |-----------|-------------|----------|------------|
//! | `Bitwise` | `memcpy`    | no       | nothing    |
//! | `Cloned`  | `T::clone`  | yes      | `T: Clone` |
//!
//! # Testing
//!
//! The `test_utils` feature exposes `VectorBehaviour`, which makes a vector's
//! next allocations fail:
//!
//! ```rust
//! use contig::vec::{Vector, VectorBehaviour};
//!
//! let mut vec: Vector<u8> = Vector::new();
//! vec.change_behaviour(VectorBehaviour::FailAtAllocate);
//!
//! assert!(vec.try_push_back(1).is_err());
//! assert!(vec.is_empty());
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use contig_raw as raw;
pub use contig_vec as vec;

pub use contig_raw::{RawStorage, StorageError};
pub use contig_vec::{Bitwise, Cloned, EmplaceError, Relocate, Vector};
