// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use contig_test_utils::{DropCounter, Tracked, expect_panic};

use crate::{Cloned, Vector};

fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_new_does_not_allocate() {
    let vec: Vector<u64> = Vector::new();

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
    assert!(vec.is_empty());
    assert!(vec.as_slice().is_empty());
}

#[test]
fn test_new_is_const() {
    static EMPTY: Vector<u8> = Vector::new();

    assert!(EMPTY.is_empty());
}

#[test]
fn test_default_matches_new() {
    let vec: Vector<String, Cloned> = Vector::default();

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_with_capacity() {
    let vec: Vector<u32> = Vector::with_capacity(7);

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 7);
}

#[test]
fn test_with_len_default_constructs() {
    let vec: Vector<String> = Vector::with_len(3);

    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 3);
    assert!(vec.iter().all(String::is_empty));
}

#[test]
fn test_with_len_zero() {
    let vec: Vector<u8> = Vector::with_len(0);

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

// =============================================================================
// resize(), resize_with()
// =============================================================================

#[test]
fn test_resize_grows_with_defaults() {
    let mut vec: Vector<i32> = Vector::from([1, 2]);

    vec.resize(4);

    assert_eq!(vec, [1, 2, 0, 0]);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_resize_shrinks_and_keeps_capacity() {
    let counter = DropCounter::new();
    let mut vec: Vector<Tracked<i32>> = (0..5).map(|i| counter.track(i)).collect();
    let capacity = vec.capacity();

    vec.resize_with(2, || unreachable!());

    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), capacity);
    assert_eq!(counter.drops(), 3);
}

#[test]
fn test_resize_with_calls_in_order() {
    let mut vec: Vector<usize> = Vector::new();
    let mut next = 0;

    vec.resize_with(4, || {
        next += 1;
        next
    });

    assert_eq!(vec, [1, 2, 3, 4]);
}

#[test]
fn test_resize_with_panic_keeps_built_prefix() {
    let counter = DropCounter::new();
    let mut vec: Vector<Tracked<i32>> = Vector::new();
    let mut calls = 0;

    let message = expect_panic(|| {
        vec.resize_with(5, || {
            calls += 1;
            if calls == 3 {
                panic!("third call");
            }
            counter.track(calls)
        });
    });

    assert_eq!(message, "third call");
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), 5);
    assert_eq!(counter.alive(), 2);
}

// =============================================================================
// truncate(), clear()
// =============================================================================

#[test]
fn test_truncate() {
    let mut vec: Vector<i32> = Vector::from([1, 2, 3, 4]);

    vec.truncate(10);
    assert_eq!(vec, [1, 2, 3, 4]);

    vec.truncate(2);
    assert_eq!(vec, [1, 2]);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_clear_drops_everything_and_keeps_capacity() {
    let counter = DropCounter::new();
    let mut vec: Vector<Tracked<i32>> = (0..3).map(|i| counter.track(i)).collect();

    vec.clear();

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 3);
    assert_eq!(counter.alive(), 0);
}

// =============================================================================
// pop_back(), pop_back_unchecked()
// =============================================================================

#[test]
fn test_pop_back() {
    let mut vec: Vector<i32> = Vector::from([1, 2]);

    assert_eq!(vec.pop_back(), Some(2));
    assert_eq!(vec.pop_back(), Some(1));
    assert_eq!(vec.pop_back(), None);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_pop_back_returns_ownership() {
    let counter = DropCounter::new();
    let mut vec: Vector<Tracked<i32>> = Vector::new();
    vec.push_back(counter.track(7));

    let popped = vec.pop_back().expect("Failed to pop_back()");

    assert_eq!(counter.drops(), 0);
    assert_eq!(popped, 7);
    drop(popped);
    assert_eq!(counter.alive(), 0);
}

#[test]
fn test_pop_back_unchecked() {
    let mut vec: Vector<i32> = Vector::from([1, 2]);

    // SAFETY: the vector holds two elements.
    let last = unsafe { vec.pop_back_unchecked() };

    assert_eq!(last, 2);
    assert_eq!(vec, [1]);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "Vector::pop_back_unchecked on an empty vector")]
fn test_pop_back_unchecked_on_empty_panics_in_debug() {
    let mut vec: Vector<i32> = Vector::new();

    // SAFETY: not upheld on purpose; the debug assertion fires first.
    let _ = unsafe { vec.pop_back_unchecked() };
}

// =============================================================================
// Element access
// =============================================================================

#[test]
fn test_index_and_get() {
    let mut vec: Vector<i32> = Vector::from([1, 2, 3]);

    vec[1] = 20;

    assert_eq!(vec[1], 20);
    assert_eq!(vec.get(2), Some(&3));
    assert_eq!(vec.get(3), None);
    assert_eq!(vec.first(), Some(&1));
    assert_eq!(vec.last(), Some(&3));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_index_out_of_range_panics() {
    let vec: Vector<i32> = Vector::from([1, 2, 3]);

    let _value = vec[3];
}

#[test]
fn test_get_unchecked() {
    let mut vec: Vector<i32> = Vector::from([1, 2, 3]);

    // SAFETY: both indices are < len.
    unsafe {
        *vec.get_unchecked_mut(0) = 10;
        assert_eq!(*vec.get_unchecked(0), 10);
        assert_eq!(*vec.get_unchecked(2), 3);
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "Vector::get_unchecked: index (is 3) should be < len (is 3)")]
fn test_get_unchecked_out_of_range_panics_in_debug() {
    let vec: Vector<i32> = Vector::from([1, 2, 3]);

    // SAFETY: not upheld on purpose; the debug assertion fires first.
    let _ = unsafe { vec.get_unchecked(3) };
}

#[test]
fn test_slice_methods_through_deref() {
    let mut vec: Vector<i32> = Vector::from([3, 1, 2]);

    vec.sort_unstable();

    assert_eq!(vec.as_slice(), [1, 2, 3]);
    assert!(vec.contains(&2));
    assert_eq!(vec.binary_search(&3), Ok(2));
}

// =============================================================================
// Trait impls
// =============================================================================

#[test]
fn test_debug_formats_as_list() {
    let vec: Vector<i32> = Vector::from([1, 2]);

    assert_eq!(format!("{vec:?}"), "[1, 2]");
}

#[test]
fn test_partial_eq_across_policies_and_slices() {
    let bitwise: Vector<i32> = Vector::from([1, 2, 3]);
    let cloned: Vector<i32, Cloned> = Vector::from([1, 2, 3]);
    let slice: &[i32] = &[1, 2, 3];

    assert_eq!(bitwise, cloned);
    assert_eq!(bitwise, slice);
    assert_eq!(bitwise, *slice);
    assert_ne!(bitwise, [1, 2]);
}

#[test]
fn test_hash_matches_slice() {
    let vec: Vector<i32> = Vector::from([1, 2, 3]);

    assert_eq!(hash_of(&vec), hash_of(&[1, 2, 3][..]));
}

#[test]
fn test_from_slice_clones() {
    let source = [String::from("x"), String::from("y")];

    let vec: Vector<String> = Vector::from(&source[..]);

    assert_eq!(vec, source);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_from_array_is_sized_exactly() {
    let vec: Vector<u8> = Vector::from([0; 5]);

    assert_eq!(vec.capacity(), 5);
}

#[test]
fn test_from_iterator_and_extend() {
    let mut vec: Vector<i32> = (1..=3).collect();

    vec.extend([4, 5]);

    assert_eq!(vec, [1, 2, 3, 4, 5]);
}

#[test]
fn test_zero_sized_elements() {
    let mut vec: Vector<()> = Vector::new();

    for _ in 0..100 {
        vec.push_back(());
    }
    vec.insert(50, ());
    vec.erase(0);

    assert_eq!(vec.len(), 100);
    assert!(vec.capacity() >= vec.len());
}

#[test]
fn test_vector_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Vector<String>>();
    assert_send_sync::<Vector<String, Cloned>>();
}
