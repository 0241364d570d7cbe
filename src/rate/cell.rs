// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Lock-free storage for the shared exchange rate

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-wide USD-per-ether rate
///
/// A single f64 stored as raw bits in an atomic word, so reads and writes
/// are whole-value replacements: a reader observes either the old or the
/// new rate, never a partial one, with no locking. The cell starts at
/// zero and is written only by the refresh task; everything else reads.
///
/// # Examples
///
/// ```
/// use weilens::RateCell;
///
/// let cell = RateCell::new();
/// assert_eq!(cell.get(), 0.0);
///
/// cell.set(1800.50);
/// assert_eq!(cell.get(), 1800.50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateCell {
    bits: Arc<AtomicU64>,
}

impl RateCell {
    /// Create a cell holding the initial zero rate
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current rate without blocking
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Replace the rate atomically
    ///
    /// Called by the refresh task on every successful fetch.
    pub fn set(&self, rate: f64) {
        self.bits.store(rate.to_bits(), Ordering::Relaxed);
    }
}
