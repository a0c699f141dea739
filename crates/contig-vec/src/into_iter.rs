// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::{fmt, ptr, slice};

use contig_raw::RawStorage;

use crate::vector::Vector;

/// Owning iterator over the elements of a [`Vector`].
///
/// Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    storage: RawStorage<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [front, back) is initialized and not yet yielded.
        unsafe { slice::from_raw_parts(self.storage.offset(self.front), self.back - self.front) }
    }
}

impl<T, R> IntoIterator for Vector<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut this = ManuallyDrop::new(self);

        IntoIter {
            storage: this.storage.take(),
            front: 0,
            back: this.len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: front < back, so the slot is initialized and yielded only once.
        let value = unsafe { self.storage.slot(self.front).read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: the slot at back was initialized and is now outside [front, back).
        Some(unsafe { self.storage.slot(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest = ptr::slice_from_raw_parts_mut(self.storage.offset(self.front), self.back - self.front);

        // SAFETY: [front, back) was never yielded; the block is released by `storage`.
        unsafe { ptr::drop_in_place(rest) };
    }
}
