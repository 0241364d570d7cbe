// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Input encodings and their parse/byte-conversion rules
//!
//! Each supported encoding owns a strict grammar and a rule for laying the
//! parsed value out as bytes. A parser must consume its whole token; anything
//! it cannot fully consume is a mismatch, reported as `None` so the
//! dispatcher can move on to the next configured encoding.

use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::bytes::{ByteSequence, Endianness};

mod base64;
mod binary;
mod decimal;
mod hex;
mod octal;

/// The closed set of input encodings a token can be interpreted as
///
/// Defined once at process start; host configuration names encodings by
/// their lowercase identifier (`"hex"`, `"decimal"`, `"binary"`, `"octal"`,
/// `"base64"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Hexadecimal digits with optional `0x`/`0X` prefix
    Hex,
    /// Signed decimal with optional comma grouping and fraction
    Decimal,
    /// Binary digits with optional `0b`/`0B` prefix
    Binary,
    /// Octal digits with optional `0o`/`0O` prefix
    Octal,
    /// Standard-alphabet Base64 with canonical padding
    Base64,
}

impl Encoding {
    /// All encodings in their default dispatch order, most preferred last
    pub const ALL: [Encoding; 5] = [
        Encoding::Base64,
        Encoding::Binary,
        Encoding::Octal,
        Encoding::Decimal,
        Encoding::Hex,
    ];

    /// Stable identifier used in host configuration
    pub const fn identifier(&self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Decimal => "decimal",
            Encoding::Binary => "binary",
            Encoding::Octal => "octal",
            Encoding::Base64 => "base64",
        }
    }

    /// Apply this encoding's grammar to a token
    ///
    /// Returns `None` when the token does not fully match; parsers never
    /// fail with an error.
    pub fn parse(&self, token: &str) -> Option<ParsedToken> {
        match self {
            Encoding::Hex => hex::parse(token),
            Encoding::Decimal => decimal::parse(token),
            Encoding::Binary => binary::parse(token),
            Encoding::Octal => octal::parse(token),
            Encoding::Base64 => base64::parse(token),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error returned when an encoding identifier is not recognized
#[derive(Debug, thiserror::Error)]
#[error("Unknown encoding identifier: {0}")]
pub struct UnknownEncoding(String);

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Encoding::Hex),
            "decimal" => Ok(Encoding::Decimal),
            "binary" => Ok(Encoding::Binary),
            "octal" => Ok(Encoding::Octal),
            "base64" => Ok(Encoding::Base64),
            other => Err(UnknownEncoding(other.to_string())),
        }
    }
}

/// Encoding-specific intermediate form produced by a successful parse
///
/// Exists only transiently between parse and byte conversion. The digit
/// variants keep the validated, prefix-stripped digit text so conversion is
/// deterministic and lossless in magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedToken {
    /// Hex digits without prefix; odd lengths get an implicit leading zero
    Hex(String),
    /// Normalized decimal numeral: optional `-`, whole part, optional fraction
    Decimal(String),
    /// Bit string without prefix
    Binary(String),
    /// Octal digits without prefix
    Octal(String),
    /// Raw buffer decoded from Base64
    Raw(Vec<u8>),
}

impl ParsedToken {
    /// Lay the parsed value out as bytes in the requested endianness
    ///
    /// Hex pads a leading zero nibble for odd digit counts. Binary pads
    /// leading zero bits to a byte boundary. Decimal and octal convert their
    /// digit magnitude to minimal most-significant-first bytes (a decimal
    /// token's sign and fraction survive only in its digit form, see
    /// [`ParsedToken::decimal_digits`]). The Base64 buffer is used as-is.
    pub fn to_bytes(&self, endianness: Endianness) -> ByteSequence {
        let be_bytes = match self {
            ParsedToken::Hex(digits) => hex::digits_to_bytes(digits),
            ParsedToken::Decimal(numeral) => decimal::magnitude_to_bytes(numeral),
            ParsedToken::Binary(bits) => binary::bits_to_bytes(bits),
            ParsedToken::Octal(digits) => octal::digits_to_bytes(digits),
            ParsedToken::Raw(buffer) => buffer.clone(),
        };
        ByteSequence::from_be(be_bytes, endianness)
    }

    /// The normalized decimal numeral, for encodings that already store one
    ///
    /// The decimal extractor prefers this over re-deriving a value from raw
    /// bytes because it preserves sign and fraction.
    pub fn decimal_digits(&self) -> Option<&str> {
        match self {
            ParsedToken::Decimal(numeral) => Some(numeral),
            _ => None,
        }
    }
}

/// Convert a validated digit string in the given radix to minimal
/// most-significant-first bytes
///
/// Zero values produce a single zero byte rather than an empty sequence.
pub(crate) fn radix_digits_to_bytes(digits: &str, radix: u32) -> Vec<u8> {
    // Digits were validated by the parser; an unparsable string here would
    // be a bug, so fall back to zero rather than panicking.
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .unwrap_or_default()
        .to_bytes_be()
}
