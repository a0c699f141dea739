// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Insertion and removal at arbitrary positions.

use core::convert::Infallible;
use core::ptr;

use crate::error::EmplaceError;
use crate::guard::Migration;
use crate::relocate::Relocate;
use crate::vector::Vector;

#[cold]
#[inline(never)]
#[track_caller]
fn insertion_index_out_of_bounds(pos: usize, len: usize) -> ! {
    panic!("insertion index (is {pos}) should be <= len (is {len})");
}

#[cold]
#[inline(never)]
#[track_caller]
fn removal_index_out_of_bounds(pos: usize, len: usize) -> ! {
    panic!("removal index (is {pos}) should be < len (is {len})");
}

#[cold]
#[inline(never)]
#[track_caller]
fn erasure_index_out_of_bounds(pos: usize, len: usize) -> ! {
    panic!("erasure index (is {pos}) should be <= len (is {len})");
}

impl<T, R: Relocate<T>> Vector<T, R> {
    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot right.
    ///
    /// Returns `pos`, the index of the inserted element.
    ///
    /// # Panics
    ///
    /// If `pos > len`, or on capacity overflow / allocator failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig_vec::Vector;
    ///
    /// let mut vec = Vector::with_capacity(4);
    /// vec.extend([1, 2, 3]);
    ///
    /// assert_eq!(vec.insert(1, 9), 1);
    /// assert_eq!(vec, [1, 9, 2, 3]);
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, pos: usize, value: T) -> usize {
        self.emplace_with(pos, || value)
    }

    /// Inserts the value returned by `f` at `pos`. Returns `pos`.
    ///
    /// If `f` panics, the vector is unchanged.
    ///
    /// # Panics
    ///
    /// If `pos > len`, or on capacity overflow / allocator failure.
    #[track_caller]
    pub fn emplace_with<F>(&mut self, pos: usize, f: F) -> usize
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_with(pos, || Ok::<T, Infallible>(f())) {
            Ok(pos) => pos,
            Err(e) => e.handle(),
        }
    }

    /// Inserts the value returned by the fallible constructor `f` at `pos`.
    ///
    /// - `pos == len`: same as appending, growth path included.
    /// - `pos < len` with spare capacity: the value is built off to the side
    ///   first, then `[pos, len)` shifts one slot right and the value lands in
    ///   `pos`. O(len - pos).
    /// - No spare capacity: a block of the grown capacity is allocated, the
    ///   prefix `[0, pos)` is relocated into it, the new element is built at
    ///   `pos`, then the suffix is relocated to `pos + 1`. If any step fails,
    ///   exactly what was built in the new block is discarded with it.
    ///
    /// # Errors
    ///
    /// [`EmplaceError::Storage`] or [`EmplaceError::Construct`]; the vector is
    /// unchanged in both cases, and also if `f` or a relocation panics.
    ///
    /// # Panics
    ///
    /// If `pos > len`.
    #[track_caller]
    pub fn try_emplace_with<E, F>(&mut self, pos: usize, f: F) -> Result<usize, EmplaceError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if pos > self.len {
            insertion_index_out_of_bounds(pos, self.len);
        }

        if pos == self.len {
            self.try_emplace_back_with(f)?;
            return Ok(pos);
        }

        if self.len == self.capacity() {
            return self.grow_and_emplace(pos, f);
        }

        let value = f().map_err(EmplaceError::Construct)?;
        let base = self.storage.as_mut_ptr();

        // SAFETY: pos < len < capacity, so [pos, len) moves into [pos + 1, len + 1)
        // inside the block; `ptr::copy` allows the overlap. Nothing between the
        // shift and the write can panic.
        unsafe {
            ptr::copy(base.add(pos), base.add(pos + 1), self.len - pos);
            base.add(pos).write(value);
        }
        self.len += 1;

        Ok(pos)
    }

    #[cold]
    #[inline(never)]
    fn grow_and_emplace<E, F>(&mut self, pos: usize, f: F) -> Result<usize, EmplaceError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let capacity = self.grown_capacity()?;
        let mut migration = Migration::<T, R>::begin(self.allocate(capacity)?);
        let src = self.storage.as_ptr();

        // SAFETY: [0, len) is initialized; pos <= len < capacity of the new block.
        unsafe { migration.relocate_prefix(src, pos) };

        let value = f().map_err(EmplaceError::Construct)?;
        migration.construct(pos, value);

        // SAFETY: [pos, len) is initialized and fits in [pos + 1, len + 1).
        unsafe { migration.relocate_suffix(src.add(pos), self.len - pos) };

        self.adopt(migration.finish());
        self.len += 1;

        Ok(pos)
    }

    /// Drops the element at `pos` and shifts `[pos + 1, len)` one slot left.
    ///
    /// Returns the index that now holds the element following the erased one:
    /// `pos` itself. Erasing at `pos == len` is a no-op returning `len`.
    /// O(len - pos). Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// If `pos > len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use contig_vec::Vector;
    ///
    /// let mut vec: Vector<i32> = Vector::from([1, 2, 3]);
    ///
    /// assert_eq!(vec.erase(0), 0);
    /// assert_eq!(vec, [2, 3]);
    /// assert_eq!(vec.erase(2), 2);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, pos: usize) -> usize {
        if pos > self.len {
            erasure_index_out_of_bounds(pos, self.len);
        }

        if pos == self.len {
            return self.len;
        }

        drop(self.remove(pos));
        pos
    }

    /// Removes and returns the element at `pos`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// If `pos >= len`.
    #[track_caller]
    pub fn remove(&mut self, pos: usize) -> T {
        if pos >= self.len {
            removal_index_out_of_bounds(pos, self.len);
        }

        let base = self.storage.as_mut_ptr();

        // SAFETY: pos < len; the value is read out before its slot is
        // overwritten by the shifted tail.
        unsafe {
            let value = base.add(pos).read();
            ptr::copy(base.add(pos + 1), base.add(pos), self.len - pos - 1);
            self.len -= 1;
            value
        }
    }
}
