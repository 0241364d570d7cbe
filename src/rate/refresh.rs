// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Background refresh of the shared exchange rate

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::{RateCell, RateSource};

/// Default refresh period between rate fetches
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(300);

/// Handle to the background rate refresh task
///
/// The task fetches once immediately, then on every period tick. Fetch
/// failures are logged and swallowed so the previous cached rate stays in
/// place; inspections never block on a refresh.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use weilens::{FixedRateSource, RateCell, RateRefresher};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let cell = RateCell::new();
/// let refresher = RateRefresher::spawn(
///     FixedRateSource::new(1800.0),
///     cell.clone(),
///     Duration::from_secs(300),
/// );
/// // ... inspections read `cell` ...
/// refresher.shutdown();
/// # }
/// ```
#[derive(Debug)]
pub struct RateRefresher {
    handle: JoinHandle<()>,
}

impl RateRefresher {
    /// Spawn the refresh task on the current tokio runtime
    pub fn spawn<S>(source: S, cell: RateCell, period: Duration) -> Self
    where
        S: RateSource + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                // First tick completes immediately, so startup gets a rate
                // without waiting a full period.
                ticker.tick().await;
                match source.fetch_rate().await {
                    Ok(rate) => {
                        cell.set(rate);
                        info!(rate, "Refreshed exchange rate");
                    }
                    Err(e) => {
                        warn!(error = %e, "Rate refresh failed; keeping previous rate");
                    }
                }
            }
        });

        Self { handle }
    }

    /// Stop the refresh task
    ///
    /// The cell keeps its last value; inspections continue to read it.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::FixedRateSource;

    #[tokio::test]
    async fn first_fetch_happens_immediately() {
        let cell = RateCell::new();
        let refresher = RateRefresher::spawn(
            FixedRateSource::new(1234.5),
            cell.clone(),
            Duration::from_secs(3600),
        );

        // The long period means only the immediate first tick can run.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cell.get(), 1234.5);
        refresher.shutdown();
    }

    #[tokio::test]
    async fn failed_fetch_leaves_previous_value() {
        let cell = RateCell::new();
        cell.set(999.0);

        let refresher = RateRefresher::spawn(
            FixedRateSource::new(f64::NAN),
            cell.clone(),
            Duration::from_millis(10),
        );

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(cell.get(), 999.0);
        refresher.shutdown();
    }

    #[tokio::test]
    async fn shutdown_stops_updates() {
        let cell = RateCell::new();
        let refresher = RateRefresher::spawn(
            FixedRateSource::new(10.0),
            cell.clone(),
            Duration::from_millis(10),
        );

        tokio::time::sleep(Duration::from_millis(30)).await;
        refresher.shutdown();

        // Let any in-flight tick drain before overwriting the cell.
        tokio::time::sleep(Duration::from_millis(30)).await;
        cell.set(0.0);
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(cell.get(), 0.0);
    }
}
