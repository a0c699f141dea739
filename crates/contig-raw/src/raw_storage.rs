// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::StorageError;

/// An owned block of uninitialized memory for `capacity` values of `T`.
///
/// The block is released on drop without touching its contents: dropping
/// values stored in it is the owner's responsibility.
///
/// The empty block uses a dangling pointer and capacity `0`. Zero-sized `T`
/// never allocates, but still records the requested capacity so that the
/// growth policy of the owning container behaves the same for every `T`.
///
/// # Example
///
/// ```rust
/// use contig_raw::RawStorage;
///
/// let mut a = RawStorage::<u8>::with_capacity(8);
/// let mut b = RawStorage::<u8>::new();
///
/// a.swap(&mut b);
/// assert_eq!(a.capacity(), 0);
/// assert_eq!(b.capacity(), 8);
///
/// let c = b.take();
/// assert_eq!(b.capacity(), 0);
/// assert_eq!(c.capacity(), 8);
/// ```
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// Safety: RawStorage owns its block exclusively, like Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates the empty block. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates a block able to hold `capacity` values of `T`.
    ///
    /// Returns the empty block when `capacity` is `0`.
    ///
    /// # Errors
    ///
    /// - [`StorageError::CapacityOverflow`] if the block size is not representable.
    /// - [`StorageError::AllocFailed`] if the global allocator returns null.
    pub fn allocate(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| StorageError::CapacityOverflow)?;

        // SAFETY: `T` is not zero-sized and `capacity > 0`, so `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(StorageError::AllocFailed { layout })?;

        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Allocates a block able to hold `capacity` values of `T`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts through
    /// [`alloc::alloc::handle_alloc_error`] on allocator failure, like `Vec`.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::allocate(capacity) {
            Ok(storage) => storage,
            Err(e) => e.handle(),
        }
    }

    /// Returns the number of values the block can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the base address of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns the mutable base address of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the address `offset` values past the base.
    ///
    /// `offset == capacity` is allowed: it is the one-past-the-end address,
    /// usable as an iteration bound but not as a slot.
    #[inline]
    pub fn offset(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.capacity,
            "RawStorage::offset: offset (is {offset}) should be <= capacity (is {})",
            self.capacity
        );
        self.ptr.as_ptr().wrapping_add(offset)
    }

    /// Returns the address of slot `index`.
    ///
    /// Only `[0, capacity)` are slots. The bound is checked by a debug
    /// assertion only.
    #[inline]
    pub fn slot(&self, index: usize) -> *mut T {
        debug_assert!(
            index < self.capacity,
            "RawStorage::slot: index (is {index}) should be < capacity (is {})",
            self.capacity
        );
        self.ptr.as_ptr().wrapping_add(index)
    }

    /// Exchanges blocks with `other`. Never fails.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the block out, leaving `self` empty with capacity `0`.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    fn current_layout(&self) -> Option<Layout> {
        if self.capacity == 0 || Self::IS_ZST {
            return None;
        }

        Layout::array::<T>(self.capacity).ok()
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.current_layout() {
            // SAFETY: the block was allocated by `allocate` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}
