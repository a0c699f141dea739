// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Copy construction and copy assignment.

use contig_raw::RawStorage;

use crate::relocate::{Cloned, Relocate};
use crate::vector::Vector;

impl<T: Clone, R: Relocate<T>> Clone for Vector<T, R> {
    /// Clones into a block sized exactly to `self.len()`, regardless of
    /// `self.capacity()`.
    fn clone(&self) -> Self {
        let mut storage = RawStorage::with_capacity(self.len);

        // SAFETY: [0, len) is initialized and `storage` is a fresh block of len
        // slots. If a clone panics, the clones made so far are dropped and
        // `storage` is released.
        unsafe { <Cloned as Relocate<T>>::relocate(self.as_ptr(), storage.as_mut_ptr(), self.len) };

        Self::from_raw(storage, self.len)
    }

    /// Copy-assigns `source`, reusing the current block when it is big enough.
    ///
    /// - `source.len() > self.capacity()`: a full clone is built and swapped in.
    /// - Otherwise the overlapping prefix is assigned element by element
    ///   through `T::clone_from`, the extra trailing elements of the longer
    ///   side are cloned in or dropped, and the capacity is kept.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut fresh = source.clone();
            self.swap(&mut fresh);
            return;
        }

        self.truncate(source.len);

        let shared = self.len;
        for (dst, src) in self.as_mut_slice().iter_mut().zip(&source[..shared]) {
            dst.clone_from(src);
        }

        for src in &source[shared..] {
            let value = src.clone();
            // SAFETY: len < source.len <= capacity; the slot is uninitialized.
            unsafe { self.storage.slot(self.len).write(value) };
            self.len += 1;
        }
    }
}
