// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for contig crates.
//!
//! Instrumented element types for checking failure safety: every value shares
//! its counters through an `Arc`, so a test keeps a handle and inspects how
//! many drops and clones happened after the container is gone.
//! [`capture_events`] records the `tracing` events a closure emits.
//!
//! ## License
//!
//! GPL-3.0-only

mod capture;
mod counter;
mod fallible;
mod fuse;

pub use capture::{CapturedEvent, capture_events};
pub use counter::{DropCounter, Tracked};
pub use fallible::{Refused, expect_panic, failing_after};
pub use fuse::{FailingClone, Fuse};
