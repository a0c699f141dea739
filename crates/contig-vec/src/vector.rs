// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::{fmt, mem, ptr, slice};

use contig_raw::RawStorage;

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::VectorBehaviour;
use crate::relocate::{Bitwise, Relocate};

/// A contiguous, growable sequence of `T`.
///
/// `Vector` owns one [`RawStorage<T>`] block and a live count `len`:
///
/// - slots `[0, len)` hold initialized values owned by the vector;
/// - slots `[len, capacity)` are uninitialized.
///
/// The second type parameter selects the [`Relocate`] policy used when the
/// elements migrate to a bigger block. The default, [`Bitwise`], moves them;
/// [`Cloned`](crate::Cloned) clones them and drops the originals on commit.
///
/// # Growth
///
/// When an append or insertion finds no spare capacity, the new capacity is
/// `1` for an empty vector and `2 * len` otherwise. [`reserve`](Self::reserve)
/// grows to exactly the requested capacity. Capacity never shrinks.
///
/// # Failure guarantees
///
/// Appending and inserting either succeed or leave the vector exactly as it
/// was, whether the element constructor panics, returns an error (`try_*`
/// variants) or the allocator fails. See the crate docs for the full list.
///
/// # Invalidation
///
/// Borrows of the elements end at any `&mut self` call. Stored indices keep
/// pointing at the same slot, which after an insertion or erasure at or before
/// them holds a different element.
///
/// # Example
///
/// ```rust
/// use contig_vec::Vector;
///
/// let mut vec = Vector::new();
/// vec.push_back(1);
/// vec.push_back(2);
/// vec.push_back(3);
///
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec, [1, 2, 3]);
/// ```
pub struct Vector<T, R = Bitwise> {
    pub(crate) storage: RawStorage<T>,
    pub(crate) len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    pub(crate) behaviour: VectorBehaviour,
    pub(crate) _policy: PhantomData<fn() -> R>,
}

impl<T> Vector<T> {
    /// Creates an empty vector with the default [`Bitwise`] policy. Does not
    /// allocate.
    pub const fn new() -> Self {
        Self::with_policy()
    }

    /// Creates an empty vector able to hold `capacity` elements without
    /// reallocating.
    ///
    /// # Panics
    ///
    /// On capacity overflow or allocator failure, like `Vec::with_capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity)
    }

    /// Creates a vector of `len` default elements, with capacity exactly `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_capacity(len);
        vec.resize_with(len, T::default);
        vec
    }
}

impl<T, R> Vector<T, R> {
    /// Creates an empty vector for any relocation policy `R`.
    ///
    /// ```rust
    /// use contig_vec::{Cloned, Vector};
    ///
    /// let vec = Vector::<String, Cloned>::with_policy();
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn with_policy() -> Self {
        Self::from_raw(RawStorage::new(), 0)
    }

    /// Like [`Vector::with_capacity`], for any relocation policy `R`.
    pub fn with_capacity_and_policy(capacity: usize) -> Self {
        Self::from_raw(RawStorage::with_capacity(capacity), 0)
    }

    pub(crate) const fn from_raw(storage: RawStorage<T>, len: usize) -> Self {
        Self {
            storage,
            len,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: VectorBehaviour::None,
            _policy: PhantomData,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the current block can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized; the pointer is aligned and non-null.
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is initialized and uniquely borrowed through self.
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), self.len) }
    }

    /// Returns the base address of the element block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns the mutable base address of the element block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Checked by a debug assertion only.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "Vector::get_unchecked: index (is {index}) should be < len (is {})",
            self.len
        );
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.storage.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Checked by a debug assertion only.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "Vector::get_unchecked_mut: index (is {index}) should be < len (is {})",
            self.len
        );
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.storage.as_mut_ptr().add(index) }
    }

    /// Drops the elements at `[len, self.len())`. Keeps the capacity.
    ///
    /// No-op if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let tail = ptr::slice_from_raw_parts_mut(self.storage.offset(len), self.len - len);
        // Commit first: a panicking Drop must not cause a double drop later.
        self.len = len;

        // SAFETY: the tail was initialized and is no longer reachable through self.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element. Keeps the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Removes and returns the last element, or `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: len > 0.
        Some(unsafe { self.pop_back_unchecked() })
    }

    /// Removes and returns the last element.
    ///
    /// # Safety
    ///
    /// The vector must not be empty. Checked by a debug assertion only.
    #[inline]
    pub unsafe fn pop_back_unchecked(&mut self) -> T {
        debug_assert!(self.len > 0, "Vector::pop_back_unchecked on an empty vector");

        self.len -= 1;
        // SAFETY: slot `len` was the last initialized slot and is now outside the live range.
        unsafe { self.storage.slot(self.len).read() }
    }

    /// Exchanges contents with `other` in O(1). Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: VectorBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T, R: Relocate<T>> Vector<T, R> {
    /// Whether this vector's relocation policy can fail mid-migration.
    ///
    /// ```rust
    /// use contig_vec::{Cloned, Vector};
    ///
    /// assert!(!Vector::<String>::relocation_may_fail());
    /// assert!(Vector::<String, Cloned>::relocation_may_fail());
    /// ```
    pub const fn relocation_may_fail() -> bool {
        R::MAY_FAIL
    }

    /// Resizes to `new_len`, default-constructing new slots or dropping
    /// trailing ones.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// When growing, capacity is first reserved for exactly `new_len`. The
    /// length is committed slot by slot, so if `f` panics the vector keeps the
    /// elements built so far.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);

        while self.len < new_len {
            let value = f();
            // SAFETY: len < new_len <= capacity and the slot is uninitialized.
            unsafe { self.storage.slot(self.len).write(value) };
            self.len += 1;
        }
    }
}

impl<T, R> Drop for Vector<T, R> {
    fn drop(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.storage.as_mut_ptr(), self.len);

        // SAFETY: [0, len) is initialized; `storage` releases the block afterwards.
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T, R> Default for Vector<T, R> {
    fn default() -> Self {
        Self::with_policy()
    }
}

impl<T, R> Deref for Vector<T, R> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, R> DerefMut for Vector<T, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, R> AsRef<[T]> for Vector<T, R> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, R> AsMut<[T]> for Vector<T, R> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Vector<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, U, R, S> PartialEq<Vector<U, S>> for Vector<T, R>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, S>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, R> Eq for Vector<T, R> {}

impl<T, U, R> PartialEq<[U]> for Vector<T, R>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, R> PartialEq<&[U]> for Vector<T, R>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, R, const N: usize> PartialEq<[U; N]> for Vector<T, R>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash, R> Hash for Vector<T, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, R: Relocate<T>> Extend<T> for Vector<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(e) = self.try_reserve_for_append(lower) {
            e.handle();
        }

        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, R: Relocate<T>> FromIterator<T> for Vector<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::with_policy();
        vec.extend(iter);
        vec
    }
}

impl<T, R: Relocate<T>, const N: usize> From<[T; N]> for Vector<T, R> {
    fn from(array: [T; N]) -> Self {
        let mut vec = Self::with_capacity_and_policy(N);
        vec.extend(array);
        vec
    }
}

impl<T: Clone, R: Relocate<T>> From<&[T]> for Vector<T, R> {
    fn from(items: &[T]) -> Self {
        let mut vec = Self::with_capacity_and_policy(items.len());
        vec.extend(items.iter().cloned());
        vec
    }
}

impl<'a, T, R> IntoIterator for &'a Vector<T, R> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, R> IntoIterator for &'a mut Vector<T, R> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
