// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the weilens library
//!
//! Inspection itself has no error type: a token that matches no encoding,
//! or a value that cannot be derived, simply produces no result. Errors
//! only arise on the exchange-rate fetch path, and even there they are
//! logged and swallowed by the refresh task rather than reaching an
//! inspection.

/// Errors that can occur while fetching the USD-per-ether exchange rate
///
/// # Examples
///
/// ```rust,ignore
/// use weilens::{HttpRateSource, RateFetchError, RateSource};
///
/// async fn example(source: HttpRateSource) {
///     match source.fetch_rate().await {
///         Ok(rate) => println!("ETH = ${rate}"),
///         Err(RateFetchError::Http(e)) => eprintln!("endpoint unreachable: {e}"),
///         Err(e) => eprintln!("bad rate data: {e}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RateFetchError {
    /// Transport or status failure while calling the rate endpoint
    #[error("Rate request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered, but not with the expected shape
    #[error("Malformed rate response: {details}")]
    MalformedResponse {
        /// What was wrong with the response body
        details: String,
    },

    /// The endpoint reported a value no inspection should ever use
    ///
    /// NaN, infinities, and negative prices are rejected here so the
    /// shared rate cell only ever holds usable values.
    #[error("Rate value out of range: {value}")]
    InvalidRate {
        /// The offending value
        value: f64,
    },
}

impl RateFetchError {
    /// Create a `MalformedResponse` error with details
    pub fn malformed_response(details: impl Into<String>) -> Self {
        RateFetchError::MalformedResponse {
            details: details.into(),
        }
    }

    /// Create an `InvalidRate` error for an unusable value
    pub fn invalid_rate(value: f64) -> Self {
        RateFetchError::InvalidRate { value }
    }
}
