// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Error returned by constructors built with [`failing_after`].
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("construction refused after {0} successful calls")]
pub struct Refused(pub usize);

/// Returns a constructor that yields `make(i)` for the first `successes`
/// calls and `Err(Refused(successes))` from then on.
pub fn failing_after<T, F>(successes: usize, mut make: F) -> impl FnMut() -> Result<T, Refused>
where
    F: FnMut(usize) -> T,
{
    let mut calls = 0;

    move || {
        if calls >= successes {
            return Err(Refused(successes));
        }

        let value = make(calls);
        calls += 1;
        Ok(value)
    }
}

/// Runs `f`, expecting it to panic, and returns the panic message.
///
/// # Panics
///
/// If `f` returns normally.
pub fn expect_panic<F, R>(f: F) -> String
where
    F: FnOnce() -> R,
{
    let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a panic, but the closure returned"),
        Err(payload) => payload,
    };

    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }

    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }

    String::from("<non-string panic payload>")
}
