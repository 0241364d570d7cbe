// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal token grammar
//!
//! Accepts an optional leading sign, digits with optional comma grouping
//! (commas are removed before validation), and at most one decimal point
//! with digits on at least one side. The parse normalizes the numeral so
//! downstream consumers never see grouping, a bare trailing point, or a
//! missing whole part.

use super::{radix_digits_to_bytes, ParsedToken};

pub(super) fn parse(token: &str) -> Option<ParsedToken> {
    let cleaned: String = token.chars().filter(|&c| c != ',').collect();

    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };

    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => {
            // A second point means the token is not a decimal numeral.
            if fraction.contains('.') {
                return None;
            }
            (whole, Some(fraction))
        }
        None => (body, None),
    };

    let digits_only = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    let valid = match fraction {
        // At least one side of the point must carry digits.
        Some(fraction) => {
            (digits_only(whole) || whole.is_empty())
                && (digits_only(fraction) || fraction.is_empty())
                && !(whole.is_empty() && fraction.is_empty())
        }
        None => digits_only(whole),
    };
    if !valid {
        return None;
    }

    Some(ParsedToken::Decimal(normalize(negative, whole, fraction)))
}

fn normalize(negative: bool, whole: &str, fraction: Option<&str>) -> String {
    let mut numeral = String::new();
    if negative {
        numeral.push('-');
    }
    numeral.push_str(if whole.is_empty() { "0" } else { whole });
    if let Some(fraction) = fraction {
        if !fraction.is_empty() {
            numeral.push('.');
            numeral.push_str(fraction);
        }
    }
    numeral
}

/// Convert the integer part's magnitude to minimal most-significant-first
/// bytes; sign and fraction live only in the digit form
pub(super) fn magnitude_to_bytes(numeral: &str) -> Vec<u8> {
    let unsigned = numeral.strip_prefix('-').unwrap_or(numeral);
    let whole = unsigned.split('.').next().unwrap_or("0");
    radix_digits_to_bytes(whole, 10)
}
