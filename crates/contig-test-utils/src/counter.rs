// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared drop / clone / creation counters.
///
/// Clones of a `DropCounter` share the same counters.
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    created: Arc<AtomicUsize>,
    clones: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl DropCounter {
    /// Creates fresh counters, all at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so that its clones and drops are counted here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.record_create();

        Tracked {
            value,
            counter: self.clone(),
        }
    }

    /// Number of values created, not counting clones.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Number of tracked clones made.
    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }

    /// Number of tracked values dropped.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }

    /// Number of tracked values currently alive.
    pub fn alive(&self) -> usize {
        self.created() + self.clones() - self.drops()
    }

    pub(crate) fn record_create(&self) {
        self.created.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn record_clone(&self) {
        self.clones.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn record_drop(&self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// A value whose clones and drops are counted by a [`DropCounter`].
#[derive(Debug)]
pub struct Tracked<T> {
    value: T,
    counter: DropCounter,
}

impl<T> Tracked<T> {
    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counter.record_clone();

        Self {
            value: self.value.clone(),
            counter: self.counter.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialEq> PartialEq<T> for Tracked<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counter.record_drop();
    }
}
