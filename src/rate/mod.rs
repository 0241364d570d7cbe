// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared USD-per-ether exchange rate
//!
//! This module provides the process-wide rate cell, a trait-based source
//! abstraction for fetching the rate, and the background task that
//! refreshes it on a fixed interval.
//!
//! # Architecture
//!
//! The rate lifecycle:
//!
//! 1. A [`RateCell`] starts at zero; inspections read it without blocking.
//! 2. [`RateRefresher::spawn`] runs a tokio task that calls the injected
//!    [`RateSource`] immediately and then on every interval tick.
//! 3. Successful fetches replace the cell's value atomically; failures are
//!    logged and leave the previous value untouched, so only the very
//!    first, pre-fetch value is ever zero.
//!
//! Inspections treat a zero rate as "price unknown" and still render
//! `"$0.00"` rather than failing.

use async_trait::async_trait;

use crate::errors::RateFetchError;

mod cell;
mod http;
mod refresh;

pub use cell::RateCell;
pub use http::HttpRateSource;
pub use refresh::RateRefresher;

/// Source of the USD-per-ether exchange rate
///
/// Implement this trait to plug in any price endpoint. The trait is
/// object-safe, allowing runtime pluggability via `Box<dyn RateSource>`.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the current USD-per-ether rate
    ///
    /// Implementations should return [`RateFetchError::InvalidRate`] for
    /// values that are not finite non-negative numbers rather than letting
    /// them reach the shared cell.
    async fn fetch_rate(&self) -> Result<f64, RateFetchError>;
}

/// Rate source that always reports the same value
///
/// Useful in tests and for hosts that manage pricing themselves.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateSource(f64);

impl FixedRateSource {
    /// Create a source pinned to the given rate
    pub const fn new(rate: f64) -> Self {
        Self(rate)
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch_rate(&self) -> Result<f64, RateFetchError> {
        if !self.0.is_finite() || self.0 < 0.0 {
            return Err(RateFetchError::invalid_rate(self.0));
        }
        Ok(self.0)
    }
}
