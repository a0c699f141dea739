// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use contig::{Cloned, EmplaceError, Vector};
use contig_test_utils::{DropCounter, FailingClone, Fuse, Tracked, expect_panic, failing_after};

#[test]
fn append_to_empty() {
    let mut vec: Vector<i32> = Vector::new();

    vec.push_back(1);
    vec.push_back(2);
    vec.push_back(3);

    assert_eq!(vec.len(), 3);
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn insert_with_spare_capacity() {
    let mut vec: Vector<i32> = Vector::with_capacity(4);
    vec.extend([1, 2, 3]);
    let ptr = vec.as_ptr();

    vec.insert(1, 9);

    assert_eq!(vec, [1, 9, 2, 3]);
    assert_eq!(vec.len(), 4);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(vec.as_ptr(), ptr);
}

#[test]
fn insert_into_full_vector() {
    let mut vec: Vector<i32> = Vector::from([1, 2, 3]);
    assert_eq!(vec.capacity(), 3);

    vec.insert(1, 9);

    assert_eq!(vec, [1, 9, 2, 3]);
    assert_eq!(vec.capacity(), 6);
}

#[test]
fn erase_front() {
    let mut vec: Vector<i32> = Vector::from([1, 2, 3]);

    vec.erase(0);

    assert_eq!(vec, [2, 3]);
    assert_eq!(vec.len(), 2);
}

#[test]
fn copy_assign_into_larger_vector() {
    let counter = DropCounter::new();
    let mut dst: Vector<Tracked<i32>> = (0..5).map(|i| counter.track(i)).collect();
    let src: Vector<Tracked<i32>> = (10..12).map(|i| counter.track(i)).collect();
    let ptr = dst.as_ptr();

    dst.clone_from(&src);

    assert_eq!(dst.len(), 2);
    assert_eq!(dst.capacity(), 5);
    assert_eq!(dst.as_ptr(), ptr);
    assert_eq!(dst, src);
    assert_eq!(counter.alive(), 4);
}

#[test]
fn failed_constructor_on_growth_leaves_vector_intact() {
    let counter = DropCounter::new();
    let mut vec: Vector<Tracked<i32>> = (0..4).map(|i| counter.track(i)).collect();
    let mut make = failing_after(0, |i| counter.track(i as i32));

    let result = vec.try_emplace_with(2, &mut make);

    assert!(matches!(result, Err(EmplaceError::Construct(_))));
    assert_eq!(vec.len(), 4);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(counter.alive(), 4);
}

#[test]
fn panicking_clone_during_growth_leaves_vector_intact() {
    let fuse = Fuse::disarmed();
    let counter = DropCounter::new();
    let mut vec = Vector::<FailingClone, Cloned>::with_capacity_and_policy(3);
    for value in 1..=3 {
        vec.push_back(FailingClone::new(value, &fuse, &counter));
    }

    fuse.arm(1);
    let message = expect_panic(|| {
        vec.push_back(FailingClone::new(4, &fuse, &counter));
    });

    assert_eq!(message, "fuse blown");
    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(vec.capacity(), 3);
    assert_eq!(counter.alive(), 3);
}
