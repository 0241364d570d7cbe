// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact decimal extraction from a parsed token
//!
//! Blockchain values routinely exceed 64-bit float precision (18 decimal
//! places on magnitudes up to 2^256), so every step here stays in
//! arbitrary-precision [`BigDecimal`]. Extraction prefers an
//! encoding-supplied numeral over re-deriving from raw bytes, and falls back
//! to the original token text as a last resort.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use tracing::debug;

use crate::bytes::ByteSequence;
use crate::encoding::ParsedToken;

/// Derive the exact decimal value a byte sequence represents
///
/// Resolution order:
/// 1. the encoding's own decimal numeral (preserves sign and fraction),
/// 2. the byte sequence interpreted as an unsigned integer, first byte most
///    significant,
/// 3. the original token text with grouping commas stripped.
///
/// Returns `None` when none of these yields a valid number; callers omit
/// the affected report lines rather than failing the inspection.
pub fn extract_decimal(
    parsed: &ParsedToken,
    bytes: &ByteSequence,
    token: &str,
) -> Option<BigDecimal> {
    if let Some(numeral) = parsed.decimal_digits() {
        match BigDecimal::from_str(numeral) {
            Ok(value) => return Some(value),
            Err(e) => {
                debug!(numeral, error = %e, "Encoding-supplied numeral did not parse");
            }
        }
    }

    if !bytes.is_empty() {
        return Some(BigDecimal::from(BigInt::from(bytes.to_biguint())));
    }

    let cleaned: String = token.chars().filter(|&c| c != ',').collect();
    BigDecimal::from_str(&cleaned).ok()
}
