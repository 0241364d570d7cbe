// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token inspection: dispatch, conversion, and report assembly
//!
//! The [`Inspector`] is the crate's front door. Given a token it tries
//! every configured encoding in order and keeps the LAST one that parses:
//! encodings are configured most-preferred-last, and the final match is
//! the deliberate tie-break when several grammars accept the same token,
//! not a first-match shortcut. The winning parse is converted to bytes,
//! reduced to an exact decimal, cross-converted, and rendered.
//!
//! # Example
//!
//! ```
//! use weilens::{Inspector, InspectorConfig, RateCell};
//!
//! let inspector = Inspector::new(InspectorConfig::default(), RateCell::new());
//! let report = inspector.inspect("0xff").unwrap();
//! assert!(report.starts_with("Weilens: 0xff"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bytes::Endianness;
use crate::encoding::Encoding;
use crate::extract::extract_decimal;
use crate::rate::RateCell;
use crate::report::{self, Section};
use crate::units::{forms_for, Denomination};

/// Host-supplied inspection configuration
///
/// The encoding list is ordered most-preferred-last; the unit list selects
/// which report sections appear (section order itself is fixed to Wei,
/// Gwei, Ether). An empty encoding or unit list disables inspection
/// entirely, which is expected, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Encodings to try, in order; the last match wins
    pub encodings: Vec<Encoding>,
    /// Denominations to show sections for
    pub units: Vec<Denomination>,
    /// Byte ordering applied when laying parsed numerals out as bytes
    pub endianness: Endianness,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            encodings: Encoding::ALL.to_vec(),
            units: Denomination::ALL.to_vec(),
            endianness: Endianness::Big,
        }
    }
}

impl InspectorConfig {
    /// Start building a config from the defaults
    pub fn builder() -> InspectorConfigBuilder {
        InspectorConfigBuilder::default()
    }
}

/// Fluent builder for [`InspectorConfig`]
///
/// # Examples
///
/// ```
/// use weilens::{Encoding, Endianness, InspectorConfig};
///
/// let config = InspectorConfig::builder()
///     .encodings([Encoding::Decimal, Encoding::Hex])
///     .endianness(Endianness::Little)
///     .build();
/// assert_eq!(config.encodings.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InspectorConfigBuilder {
    config: InspectorConfig,
}

impl InspectorConfigBuilder {
    /// Replace the encoding list (ordered, most preferred last)
    pub fn encodings(mut self, encodings: impl Into<Vec<Encoding>>) -> Self {
        self.config.encodings = encodings.into();
        self
    }

    /// Replace the displayed unit list
    pub fn units(mut self, units: impl Into<Vec<Denomination>>) -> Self {
        self.config.units = units.into();
        self
    }

    /// Set the byte ordering
    pub fn endianness(mut self, endianness: Endianness) -> Self {
        self.config.endianness = endianness;
        self
    }

    /// Finish building
    pub fn build(self) -> InspectorConfig {
        self.config
    }
}

/// Inspects tokens and renders multi-unit reports
///
/// Holds the host configuration and a read handle to the shared exchange
/// rate. Inspection is synchronous and touches no mutable state, so one
/// inspector can serve any number of sequential requests.
#[derive(Debug, Clone)]
pub struct Inspector {
    config: InspectorConfig,
    rate: RateCell,
}

impl Inspector {
    /// Create an inspector over a config and a rate cell
    ///
    /// The cell is typically shared with a
    /// [`RateRefresher`](crate::RateRefresher); a never-refreshed cell
    /// reads zero and prices everything at `"$0.00"`.
    pub fn new(config: InspectorConfig, rate: RateCell) -> Self {
        Self { config, rate }
    }

    /// The active configuration
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Inspect a token and render its report
    ///
    /// Returns `None` when no configured encoding accepts the token, when
    /// the encoding or unit list is empty, or when no decimal value could
    /// be derived.
    pub fn inspect(&self, token: &str) -> Option<String> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if self.config.encodings.is_empty() || self.config.units.is_empty() {
            debug!("Inspection disabled: no encodings or units configured");
            return None;
        }

        // Last successful parse wins; keep iterating past earlier matches.
        let mut winner = None;
        for &encoding in &self.config.encodings {
            if let Some(parsed) = encoding.parse(token) {
                winner = Some((encoding, parsed));
            }
        }
        let (encoding, parsed) = winner?;
        debug!(%encoding, token, "Token matched");

        let bytes = parsed.to_bytes(self.config.endianness);
        let value = extract_decimal(&parsed, &bytes, token)?;
        let rate = self.rate.get();

        let sections: Vec<Section> = Denomination::ALL
            .into_iter()
            .filter(|denomination| self.config.units.contains(denomination))
            .map(|denomination| Section {
                source: denomination,
                forms: forms_for(denomination, &value, rate),
            })
            .collect();

        report::render_report(token, &sections)
    }
}
