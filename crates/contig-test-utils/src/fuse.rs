// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::counter::DropCounter;

/// A shared countdown that panics when it burns out.
///
/// Clones share the same countdown.
#[derive(Debug, Clone)]
pub struct Fuse {
    remaining: Arc<AtomicUsize>,
}

impl Fuse {
    /// A fuse that allows `remaining` burns before panicking.
    pub fn new(remaining: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(remaining)),
        }
    }

    /// A fuse that never blows.
    pub fn disarmed() -> Self {
        Self::new(usize::MAX)
    }

    /// Re-arms the fuse with `remaining` burns.
    pub fn arm(&self, remaining: usize) {
        self.remaining.store(remaining, Ordering::SeqCst);
    }

    /// Consumes one burn.
    ///
    /// # Panics
    ///
    /// With `"fuse blown"` once no burns are left.
    pub fn burn(&self) {
        let previous = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));

        if previous.is_err() {
            panic!("fuse blown");
        }
    }
}

/// An element whose `clone` burns a [`Fuse`] and whose drops are counted.
#[derive(Debug)]
pub struct FailingClone {
    value: i32,
    fuse: Fuse,
    counter: DropCounter,
}

impl FailingClone {
    /// Creates a value tied to `fuse` and `counter`.
    pub fn new(value: i32, fuse: &Fuse, counter: &DropCounter) -> Self {
        counter.record_create();

        Self {
            value,
            fuse: fuse.clone(),
            counter: counter.clone(),
        }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for FailingClone {
    fn clone(&self) -> Self {
        self.fuse.burn();
        self.counter.record_clone();

        Self {
            value: self.value,
            fuse: self.fuse.clone(),
            counter: self.counter.clone(),
        }
    }
}

impl PartialEq for FailingClone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<i32> for FailingClone {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}

impl Drop for FailingClone {
    fn drop(&mut self) {
        self.counter.record_drop();
    }
}
