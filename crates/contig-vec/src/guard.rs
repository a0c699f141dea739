// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scope guards that undo partially completed work on unwind or early return.

use core::marker::PhantomData;
use core::mem;
use core::ptr;

use contig_raw::RawStorage;

use crate::relocate::Relocate;

/// Drops `base[..initialized]` unless committed.
pub(crate) struct PartialInit<T> {
    base: *mut T,
    initialized: usize,
}

impl<T> PartialInit<T> {
    pub(crate) fn new(base: *mut T) -> Self {
        Self {
            base,
            initialized: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn advance(&mut self) {
        self.initialized += 1;
    }

    /// Keeps the initialized prefix alive.
    pub(crate) fn commit(self) {
        mem::forget(self);
    }
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        // SAFETY: exactly base[..initialized] was written and is owned by us.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.base, self.initialized));
        }
    }
}

/// A storage migration in progress.
///
/// Tracks what has been built inside the new block:
///
/// ```text
/// [0, prefix)                  relocated by R
/// [inserted]                   freshly constructed element (optional)
/// [inserted + 1, + suffix)     relocated by R
/// ```
///
/// Dropping an unfinished migration abandons exactly those ranges and releases
/// the new block, leaving the source untouched.
pub(crate) struct Migration<T, R: Relocate<T>> {
    storage: RawStorage<T>,
    prefix: usize,
    inserted: Option<usize>,
    suffix: usize,
    _policy: PhantomData<fn() -> R>,
}

impl<T, R: Relocate<T>> Migration<T, R> {
    pub(crate) fn begin(storage: RawStorage<T>) -> Self {
        Self {
            storage,
            prefix: 0,
            inserted: None,
            suffix: 0,
            _policy: PhantomData,
        }
    }

    /// Relocates `src[..count]` to the start of the new block.
    ///
    /// # Safety
    ///
    /// `src[..count]` must be initialized, `count` must fit the new block and
    /// no prefix may have been relocated yet.
    pub(crate) unsafe fn relocate_prefix(&mut self, src: *const T, count: usize) {
        debug_assert_eq!(self.prefix, 0);

        // SAFETY: the new block is fresh and disjoint from src.
        unsafe { R::relocate(src, self.storage.as_mut_ptr(), count) };
        self.prefix = count;
    }

    /// Writes `value` into slot `index` of the new block.
    pub(crate) fn construct(&mut self, index: usize, value: T) {
        debug_assert!(self.inserted.is_none());
        debug_assert!(index >= self.prefix);

        // SAFETY: slot() bounds the index; the slot is still uninitialized.
        unsafe { self.storage.slot(index).write(value) };
        self.inserted = Some(index);
    }

    /// Relocates `src[..count]` to the slots right after the inserted element.
    ///
    /// # Safety
    ///
    /// An element must have been constructed, `src[..count]` must be initialized
    /// and fit in the new block after it.
    pub(crate) unsafe fn relocate_suffix(&mut self, src: *const T, count: usize) {
        let Some(inserted) = self.inserted else {
            unreachable!("Migration::relocate_suffix called before construct");
        };

        // SAFETY: the destination lies inside the fresh block, disjoint from src.
        unsafe { R::relocate(src, self.storage.offset(inserted + 1), count) };
        self.suffix = count;
    }

    /// Commits the migration and hands the new block over.
    pub(crate) fn finish(mut self) -> RawStorage<T> {
        let storage = self.storage.take();
        mem::forget(self);
        storage
    }

    fn constructed(&self) -> usize {
        self.prefix + usize::from(self.inserted.is_some()) + self.suffix
    }
}

impl<T, R: Relocate<T>> Drop for Migration<T, R> {
    fn drop(&mut self) {
        tracing::debug!(
            constructed = self.constructed(),
            capacity = self.storage.capacity(),
            "migration rolled back"
        );

        let base = self.storage.as_mut_ptr();

        // SAFETY: each range below was built by this migration and is owned by nobody else.
        unsafe {
            R::abandon(base, self.prefix);

            if let Some(inserted) = self.inserted {
                ptr::drop_in_place(base.add(inserted));
                R::abandon(base.add(inserted + 1), self.suffix);
            }
        }
        // `storage` is released when the fields drop.
    }
}
