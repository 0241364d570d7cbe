// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical byte representation of a parsed token
//!
//! Every encoding parser reduces its token to a [`ByteSequence`], the form
//! all downstream unit conversion operates on. The sequence is stored in the
//! order requested by the caller; it is always consumed most-significant
//! byte first, so requesting [`Endianness::Little`] changes the numeric
//! value a token inspects to.

use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Byte ordering applied when a parsed numeral is laid out as bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Most-significant byte first
    #[default]
    Big,
    /// Least-significant byte first
    Little,
}

impl Endianness {
    /// Stable identifier used in host configuration
    pub const fn identifier(&self) -> &'static str {
        match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error returned when an endianness identifier is not recognized
#[derive(Debug, thiserror::Error)]
#[error("Unknown endianness identifier: {0}")]
pub struct UnknownEndianness(String);

impl FromStr for Endianness {
    type Err = UnknownEndianness;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "big" => Ok(Endianness::Big),
            "little" => Ok(Endianness::Little),
            other => Err(UnknownEndianness(other.to_string())),
        }
    }
}

/// An ordered sequence of 8-bit values representing a parsed token
///
/// Constructed from most-significant-first bytes via [`ByteSequence::from_be`],
/// which reverses the order when little endianness is requested.
///
/// # Examples
///
/// ```
/// use weilens::{ByteSequence, Endianness};
///
/// let big = ByteSequence::from_be(vec![0x01, 0x02], Endianness::Big);
/// let little = ByteSequence::from_be(vec![0x01, 0x02], Endianness::Little);
/// assert_eq!(big.as_slice(), &[0x01, 0x02]);
/// assert_eq!(little.as_slice(), &[0x02, 0x01]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteSequence(Vec<u8>);

impl ByteSequence {
    /// Lay out most-significant-first bytes in the requested order
    pub fn from_be(mut bytes: Vec<u8>, endianness: Endianness) -> Self {
        if endianness == Endianness::Little {
            bytes.reverse();
        }
        Self(bytes)
    }

    /// View the bytes in their stored order
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the sequence
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the sequence holds no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the stored bytes as an unsigned integer, first byte most
    /// significant
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
