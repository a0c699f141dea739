// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity growth and appending.

use core::convert::Infallible;

use contig_raw::{RawStorage, StorageError};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::VectorBehaviour;
use crate::error::EmplaceError;
use crate::guard::Migration;
use crate::relocate::Relocate;
use crate::vector::Vector;

impl<T, R: Relocate<T>> Vector<T, R> {
    /// Capacity to grow to when an append or insertion finds the block full.
    pub(crate) fn grown_capacity(&self) -> Result<usize, StorageError> {
        if self.len == 0 {
            return Ok(1);
        }

        self.len.checked_mul(2).ok_or(StorageError::CapacityOverflow)
    }

    pub(crate) fn allocate(&self, capacity: usize) -> Result<RawStorage<T>, StorageError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, VectorBehaviour::FailAtAllocate) {
            let layout = core::alloc::Layout::array::<T>(capacity)
                .map_err(|_| StorageError::CapacityOverflow)?;
            return Err(StorageError::AllocFailed { layout });
        }

        RawStorage::allocate(capacity)
    }

    /// Swaps in a block whose `[0, len)` already holds the relocated
    /// elements, then retires the old elements and releases the old block.
    pub(crate) fn adopt(&mut self, mut fresh: RawStorage<T>) {
        tracing::trace!(
            from_capacity = self.storage.capacity(),
            to_capacity = fresh.capacity(),
            len = self.len,
            may_fail = R::MAY_FAIL,
            "vector storage migrated"
        );

        self.storage.swap(&mut fresh);

        // SAFETY: `fresh` now holds the old block, whose [0, len) was relocated
        // by R and is neither retired nor abandoned.
        unsafe { R::retire(fresh.as_mut_ptr(), self.len) };
        // The old block is released when `fresh` drops.
    }

    /// Ensures capacity for at least `capacity` elements.
    ///
    /// If `capacity <= self.capacity()` nothing happens. Otherwise a block of
    /// exactly `capacity` is allocated, the live elements are relocated into
    /// it, and the old block is released. O(len).
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from the allocator. On error, or if a
    /// [`Cloned`](crate::Cloned) relocation panics, the vector is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig_raw::StorageError;
    /// use contig_vec::Vector;
    ///
    /// fn example() -> Result<(), StorageError> {
    ///     let mut vec = Vector::<u64>::new();
    ///     vec.try_reserve(10)?;
    ///     assert_eq!(vec.capacity(), 10);
    ///
    ///     // Already large enough: no-op.
    ///     vec.try_reserve(4)?;
    ///     assert_eq!(vec.capacity(), 10);
    ///
    ///     assert!(vec.try_reserve(usize::MAX).is_err());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        let mut fresh = self.allocate(capacity)?;

        // SAFETY: [0, len) is initialized and `fresh` holds capacity > len slots.
        // If R unwinds, it has dropped its own writes and `fresh` is released.
        unsafe { R::relocate(self.storage.as_ptr(), fresh.as_mut_ptr(), self.len) };

        self.adopt(fresh);
        Ok(())
    }

    /// Ensures capacity for at least `capacity` elements.
    ///
    /// # Panics
    ///
    /// On capacity overflow or allocator failure, like `Vec::reserve_exact`.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(e) = self.try_reserve(capacity) {
            e.handle();
        }
    }

    /// Makes room for `additional` appends, applying the growth factor when
    /// the spare capacity is not enough.
    pub(crate) fn try_reserve_for_append(&mut self, additional: usize) -> Result<(), StorageError> {
        if additional <= self.capacity() - self.len {
            return Ok(());
        }

        let required = self
            .len
            .checked_add(additional)
            .ok_or(StorageError::CapacityOverflow)?;

        self.try_reserve(required.max(self.grown_capacity()?))
    }

    /// Appends `value` and returns a reference to it.
    ///
    /// # Panics
    ///
    /// On capacity overflow or allocator failure.
    pub fn push_back(&mut self, value: T) -> &mut T {
        self.emplace_back_with(|| value)
    }

    /// Appends `value`, reporting growth failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] if growing failed; `value` is dropped and
    /// the vector is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<&mut T, StorageError> {
        match self.try_emplace_back_with(|| Ok::<T, Infallible>(value)) {
            Ok(slot) => Ok(slot),
            Err(EmplaceError::Storage(e)) => Err(e),
            Err(EmplaceError::Construct(never)) => match never {},
        }
    }

    /// Appends the value returned by `f` and returns a reference to it.
    ///
    /// If `f` panics, the vector is unchanged.
    ///
    /// # Panics
    ///
    /// On capacity overflow or allocator failure.
    pub fn emplace_back_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_back_with(|| Ok::<T, Infallible>(f())) {
            Ok(slot) => slot,
            Err(e) => e.handle(),
        }
    }

    /// Appends the value returned by the fallible constructor `f`.
    ///
    /// With spare capacity the value is written straight into the next free
    /// slot. Without it, a block of the grown capacity is allocated and the new
    /// element is built there first, before any existing element is touched;
    /// only then are the existing elements relocated in front of it.
    ///
    /// # Errors
    ///
    /// - [`EmplaceError::Storage`] if growing failed; `f` is not called.
    /// - [`EmplaceError::Construct`] if `f` failed.
    ///
    /// In both cases (and if `f` panics) length, capacity and elements are
    /// exactly as before the call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig_vec::{EmplaceError, Vector};
    ///
    /// let mut vec = Vector::<u32>::with_capacity(1);
    /// vec.push_back(1);
    ///
    /// let result = vec.try_emplace_back_with(|| "nine".parse::<u32>());
    /// assert!(matches!(result, Err(EmplaceError::Construct(_))));
    ///
    /// assert_eq!(vec, [1]);
    /// assert_eq!(vec.capacity(), 1);
    /// ```
    pub fn try_emplace_back_with<E, F>(&mut self, f: F) -> Result<&mut T, EmplaceError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.len < self.capacity() {
            let value = f().map_err(EmplaceError::Construct)?;
            let slot = self.storage.slot(self.len);

            // SAFETY: len < capacity and slot `len` is uninitialized.
            unsafe { slot.write(value) };
            self.len += 1;

            // SAFETY: the slot was just initialized and is borrowed through self.
            return Ok(unsafe { &mut *slot });
        }

        self.grow_and_emplace_back(f)
    }

    #[cold]
    #[inline(never)]
    fn grow_and_emplace_back<E, F>(&mut self, f: F) -> Result<&mut T, EmplaceError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let capacity = self.grown_capacity()?;
        let mut migration = Migration::<T, R>::begin(self.allocate(capacity)?);

        // Dropping `migration` on failure only releases the unreferenced block.
        let value = f().map_err(EmplaceError::Construct)?;
        migration.construct(self.len, value);

        // SAFETY: [0, len) is initialized and fits in front of the new element.
        unsafe { migration.relocate_prefix(self.storage.as_ptr(), self.len) };

        self.adopt(migration.finish());
        self.len += 1;

        // SAFETY: the last slot holds the element constructed above.
        Ok(unsafe { &mut *self.storage.slot(self.len - 1) })
    }
}
