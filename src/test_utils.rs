// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and process-wide test state.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Serializes tests that read or write environment variables.
///
/// A test that panicked while holding the lock does not block the others.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner)
}
