// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Relocation policies: how live elements travel to a new storage block.
//!
//! A migration has two phases. First the live range is *relocated* into the
//! new block while the old block stays intact. Then, once every step of the
//! migration has succeeded, the old range is *retired*. If a later step fails
//! instead, the relocated copies are *abandoned* and the old range keeps
//! ownership of the values.
//!
//! | policy      | `MAY_FAIL` | relocate           | retire          | abandon          |
//! |-------------|------------|--------------------|-----------------|------------------|
//! | [`Bitwise`] | `false`    | `memcpy` (a move)  | nothing to drop | nothing to drop  |
//! | [`Cloned`]  | `true`     | `Clone` per value  | drop originals  | drop the clones  |
//!
//! A Rust move is a bit copy and cannot fail, so [`Bitwise`] works for every
//! type, including types that cannot be duplicated at all. [`Cloned`] is the
//! copying strategy: the originals are untouched until the migration commits,
//! and a panicking `clone` leaves them exactly as they were.

use core::ptr;

use crate::guard::PartialInit;

/// Strategy used to move live elements into a new storage block.
///
/// # Safety
///
/// Implementations must uphold the following for every method:
///
/// - `relocate` either initializes all of `dst[..count]` from `src[..count]`, or
///   unwinds having dropped every value it wrote to `dst` and without modifying
///   `src`.
/// - After a successful `relocate`, `retire(src, count)` ends the lifetime of
///   the source values so that `dst` is the only owner.
/// - After a successful `relocate`, `abandon(dst, count)` ends the lifetime of
///   the destination values so that `src` is the only owner.
pub unsafe trait Relocate<T> {
    /// Whether relocation runs user code that can panic.
    const MAY_FAIL: bool;

    /// Relocates `count` values from `src` into the uninitialized `dst`.
    ///
    /// # Safety
    ///
    /// `src[..count]` must be initialized, `dst[..count]` must be valid for
    /// writes, and the two ranges must not overlap.
    unsafe fn relocate(src: *const T, dst: *mut T, count: usize);

    /// Ends the lifetime of a source range after a committed migration.
    ///
    /// # Safety
    ///
    /// `src[..count]` must have been relocated by this policy and not retired
    /// or abandoned yet.
    unsafe fn retire(src: *mut T, count: usize);

    /// Ends the lifetime of a destination range of an uncommitted migration.
    ///
    /// # Safety
    ///
    /// `dst[..count]` must have been produced by `relocate` and not retired or
    /// abandoned yet.
    unsafe fn abandon(dst: *mut T, count: usize);
}

/// Relocation by bitwise move. The default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bitwise;

// Safety: memcpy cannot fail, and after it exactly one of src / dst is
// treated as the owner, so retire and abandon have nothing to drop.
unsafe impl<T> Relocate<T> for Bitwise {
    const MAY_FAIL: bool = false;

    #[inline]
    unsafe fn relocate(src: *const T, dst: *mut T, count: usize) {
        // SAFETY: guaranteed by the caller.
        unsafe { ptr::copy_nonoverlapping(src, dst, count) };
    }

    #[inline(always)]
    unsafe fn retire(_src: *mut T, _count: usize) {}

    #[inline(always)]
    unsafe fn abandon(_dst: *mut T, _count: usize) {}
}

/// Relocation by cloning, with the originals dropped on commit.
///
/// For element types that should see each relocation through their `Clone`
/// and `Drop` impls instead of having their bits moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cloned;

// Safety: PartialInit drops every clone already written if `clone` unwinds,
// and `src` is only read.
unsafe impl<T: Clone> Relocate<T> for Cloned {
    const MAY_FAIL: bool = true;

    unsafe fn relocate(src: *const T, dst: *mut T, count: usize) {
        let mut written = PartialInit::new(dst);

        for i in 0..count {
            // SAFETY: i < count; src[i] is initialized and dst[i] is writable.
            unsafe { dst.add(i).write((*src.add(i)).clone()) };
            written.advance();
        }

        written.commit();
    }

    unsafe fn retire(src: *mut T, count: usize) {
        // SAFETY: src[..count] is still initialized and owned by the caller.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(src, count)) };
    }

    unsafe fn abandon(dst: *mut T, count: usize) {
        // SAFETY: dst[..count] holds clones nobody else owns.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(dst, count)) };
    }
}
