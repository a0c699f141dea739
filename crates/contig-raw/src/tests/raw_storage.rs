// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{RawStorage, StorageError};

// =============================================================================
// new()
// =============================================================================

#[test]
fn test_new_is_empty() {
    let storage = RawStorage::<u64>::new();

    assert_eq!(storage.capacity(), 0);
    assert_eq!(storage.as_ptr(), core::ptr::NonNull::<u64>::dangling().as_ptr());
}

#[test]
fn test_default_is_empty() {
    let storage = RawStorage::<String>::default();

    assert_eq!(storage.capacity(), 0);
}

// =============================================================================
// allocate()
// =============================================================================

#[test]
fn test_allocate_zero_does_not_allocate() {
    let storage = RawStorage::<u64>::allocate(0).expect("Failed to allocate(0)");

    assert_eq!(storage.capacity(), 0);
    assert_eq!(storage.as_ptr(), core::ptr::NonNull::<u64>::dangling().as_ptr());
}

#[test]
fn test_allocate_returns_aligned_block() {
    let storage = RawStorage::<u64>::allocate(10).expect("Failed to allocate(10)");

    assert_eq!(storage.capacity(), 10);
    assert_eq!(storage.as_ptr() as usize % core::mem::align_of::<u64>(), 0);
}

#[test]
fn test_allocate_block_is_writable_across_capacity() {
    let storage = RawStorage::<u32>::allocate(64).expect("Failed to allocate(64)");

    for i in 0..64 {
        unsafe { storage.slot(i).write(i as u32 * 3) };
    }

    for i in 0..64 {
        assert_eq!(unsafe { storage.slot(i).read() }, i as u32 * 3);
    }
}

#[test]
fn test_allocate_reports_capacity_overflow() {
    let result = RawStorage::<u64>::allocate(usize::MAX);

    assert!(matches!(result, Err(StorageError::CapacityOverflow)));
}

#[test]
fn test_allocate_reports_alloc_failure() {
    // Fits in a Layout (exactly isize::MAX bytes) but no allocator can serve it.
    let result = RawStorage::<u8>::allocate(isize::MAX as usize);

    match result {
        Err(StorageError::AllocFailed { layout }) => {
            assert_eq!(layout.size(), isize::MAX as usize);
            assert_eq!(layout.align(), 1);
        }
        other => panic!("expected AllocFailed, got {other:?}"),
    }
}

#[test]
fn test_allocate_zero_sized_records_capacity() {
    let storage = RawStorage::<()>::allocate(1_000).expect("Failed to allocate(1_000)");

    assert_eq!(storage.capacity(), 1_000);
    assert_eq!(storage.as_ptr(), core::ptr::NonNull::<()>::dangling().as_ptr());
}

// =============================================================================
// with_capacity()
// =============================================================================

#[test]
fn test_with_capacity() {
    let storage = RawStorage::<String>::with_capacity(3);

    assert_eq!(storage.capacity(), 3);
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_with_capacity_panics_on_overflow() {
    let _storage = RawStorage::<u64>::with_capacity(usize::MAX);
}

// =============================================================================
// offset(), slot()
// =============================================================================

#[test]
fn test_offset_one_past_the_end_is_allowed() {
    let storage = RawStorage::<u16>::allocate(4).expect("Failed to allocate(4)");
    let end = storage.offset(4);

    assert_eq!(end as usize - storage.as_ptr() as usize, 4 * core::mem::size_of::<u16>());
}

#[test]
fn test_slot_matches_offset() {
    let storage = RawStorage::<u16>::allocate(4).expect("Failed to allocate(4)");

    for i in 0..4 {
        assert_eq!(storage.slot(i), storage.offset(i));
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "should be <= capacity")]
fn test_offset_past_the_end_asserts() {
    let storage = RawStorage::<u16>::allocate(4).expect("Failed to allocate(4)");

    let _ = storage.offset(5);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "should be < capacity")]
fn test_slot_at_capacity_asserts() {
    let storage = RawStorage::<u16>::allocate(4).expect("Failed to allocate(4)");

    let _ = storage.slot(4);
}

// =============================================================================
// swap(), take()
// =============================================================================

#[test]
fn test_swap_exchanges_blocks() {
    let mut a = RawStorage::<u8>::allocate(2).expect("Failed to allocate(2)");
    let mut b = RawStorage::<u8>::allocate(5).expect("Failed to allocate(5)");
    let (a_ptr, b_ptr) = (a.as_ptr(), b.as_ptr());

    a.swap(&mut b);

    assert_eq!(a.capacity(), 5);
    assert_eq!(b.capacity(), 2);
    assert_eq!(a.as_ptr(), b_ptr);
    assert_eq!(b.as_ptr(), a_ptr);
}

#[test]
fn test_take_leaves_source_empty() {
    let mut a = RawStorage::<u8>::allocate(7).expect("Failed to allocate(7)");
    let ptr = a.as_ptr();

    let b = a.take();

    assert_eq!(a.capacity(), 0);
    assert_eq!(b.capacity(), 7);
    assert_eq!(b.as_ptr(), ptr);
}

// =============================================================================
// Drop
// =============================================================================

#[test]
fn test_drop_does_not_drop_contents() {
    use std::rc::Rc;

    let shared = Rc::new(());
    let storage = RawStorage::<Rc<()>>::allocate(1).expect("Failed to allocate(1)");
    unsafe { storage.slot(0).write(Rc::clone(&shared)) };

    drop(storage);

    // The clone written into the block was leaked, not dropped.
    assert_eq!(Rc::strong_count(&shared), 2);
}
