// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Hexadecimal token grammar
//!
//! Accepts an optional `0x`/`0X` prefix followed by one or more hex digits.
//! An odd digit count is tolerated; byte conversion pads an implicit leading
//! zero nibble.

use super::ParsedToken;

pub(super) fn parse(token: &str) -> Option<ParsedToken> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(ParsedToken::Hex(digits.to_ascii_lowercase()))
}

/// Split validated hex digits into bytes, most significant first
pub(super) fn digits_to_bytes(digits: &str) -> Vec<u8> {
    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };

    padded
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let high = (pair[0] as char).to_digit(16).unwrap_or(0) as u8;
            let low = (pair[1] as char).to_digit(16).unwrap_or(0) as u8;
            (high << 4) | low
        })
        .collect()
}
