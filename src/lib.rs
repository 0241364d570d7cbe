// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Multi-base token inspection for EVM values
//!
//! `weilens` takes a textual token (typically the word under an editor
//! cursor), interprets it as a numeric byte sequence in one of several
//! encodings (hex, decimal, binary, octal, Base64), and renders the value
//! across wei, gwei, and ether plus a best-effort USD conversion. All
//! wei/gwei/ether/USD arithmetic runs in arbitrary-precision decimals, so
//! 18-decimal-place ether amounts on 2^256-sized values stay exact.
//!
//! # Quick start
//!
//! ```
//! use weilens::{Inspector, InspectorConfig, RateCell};
//!
//! let inspector = Inspector::new(InspectorConfig::default(), RateCell::new());
//! let report = inspector.inspect("0xff").unwrap();
//! assert_eq!(
//!     report,
//!     "Weilens: 0xff\n\
//!      Wei\n\
//!      Gwei:  0.000000255\n\
//!      Ether: 0.000000000000000255\n\
//!      Usd:   $0.00\n\
//!      Gwei\n\
//!      Wei:   255000000000\n\
//!      Ether: 0.000000255\n\
//!      Usd:   $0.00\n\
//!      Ether\n\
//!      Wei:   255000000000000000000\n\
//!      Gwei:  255000000000\n\
//!      Usd:   $0.00"
//! );
//! ```
//!
//! To price USD conversions, share the [`RateCell`] with a
//! [`RateRefresher`] driving a [`RateSource`] such as [`HttpRateSource`].

mod bytes;
mod encoding;
mod errors;
mod extract;
mod inspector;
mod rate;
mod report;
mod units;

pub use bytes::{ByteSequence, Endianness, UnknownEndianness};
pub use encoding::{Encoding, ParsedToken, UnknownEncoding};
pub use errors::RateFetchError;
pub use extract::extract_decimal;
pub use inspector::{Inspector, InspectorConfig, InspectorConfigBuilder};
pub use rate::{FixedRateSource, HttpRateSource, RateCell, RateRefresher, RateSource};
pub use report::{render_report, Section, TOOL_NAME};
pub use units::{
    convert, format_decimal, format_usd, forms_for, ConvertedForm, Denomination,
    UnknownDenomination, USD_LABEL,
};
