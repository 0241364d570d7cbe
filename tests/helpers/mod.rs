// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for weilens integration tests
//!
//! Provides a scripted rate source so refresh behavior can be exercised
//! without a real price endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use weilens::{RateFetchError, RateSource};

/// Install a fmt subscriber so failing tests show refresh activity
///
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Rate source that replays a fixed script of fetch outcomes
///
/// Each fetch consumes the next scripted step; once the script is
/// exhausted the last step repeats. `None` steps simulate a fetch
/// failure.
///
/// # Example
///
/// ```rust,ignore
/// let source = ScriptedRateSource::new(vec![Some(100.0), None, Some(250.0)]);
/// ```
pub struct ScriptedRateSource {
    script: Vec<Option<f64>>,
    cursor: AtomicUsize,
}

impl ScriptedRateSource {
    pub fn new(script: Vec<Option<f64>>) -> Self {
        assert!(!script.is_empty(), "script must have at least one step");
        Self {
            script,
            cursor: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RateSource for ScriptedRateSource {
    async fn fetch_rate(&self) -> Result<f64, RateFetchError> {
        let step = self.cursor.fetch_add(1, Ordering::SeqCst);
        let outcome = self.script[step.min(self.script.len() - 1)];
        outcome.ok_or_else(|| RateFetchError::malformed_response("scripted failure"))
    }
}
