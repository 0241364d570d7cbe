// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP spot-price rate source

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::RateSource;
use crate::errors::RateFetchError;

/// Default spot-price endpoint (Coinbase ETH-USD)
pub const DEFAULT_ENDPOINT: &str = "https://api.coinbase.com/v2/prices/ETH-USD/spot";

/// Rate source backed by a Coinbase-style spot-price JSON endpoint
///
/// The endpoint is expected to answer
/// `{"data": {"amount": "<decimal>", "base": "ETH", "currency": "USD"}}`.
///
/// # Examples
///
/// ```no_run
/// use weilens::HttpRateSource;
///
/// let source = HttpRateSource::default_endpoint().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    client: reqwest::Client,
    endpoint: Url,
}

#[derive(Debug, Deserialize)]
struct SpotPriceResponse {
    data: SpotPriceData,
}

#[derive(Debug, Deserialize)]
struct SpotPriceData {
    amount: String,
}

impl HttpRateSource {
    /// Create a source for a custom endpoint
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Create a source for the default Coinbase ETH-USD endpoint
    pub fn default_endpoint() -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(DEFAULT_ENDPOINT)?))
    }

    fn parse_amount(amount: &str) -> Result<f64, RateFetchError> {
        let rate: f64 = amount.parse().map_err(|_| {
            RateFetchError::malformed_response(format!("Non-numeric amount {amount:?}"))
        })?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(RateFetchError::invalid_rate(rate));
        }
        Ok(rate)
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn fetch_rate(&self) -> Result<f64, RateFetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;

        let body: SpotPriceResponse = response.json().await?;
        Self::parse_amount(&body.data.amount)
    }
}
