//! Octal token grammar
//!
//! Accepts an optional `0o`/`0O` prefix followed by one or more octal
//! digits.

use super::{radix_digits_to_bytes, ParsedToken};

pub(super) fn parse(token: &str) -> Option<ParsedToken> {
    let digits = token
        .strip_prefix("0o")
        .or_else(|| token.strip_prefix("0O"))
        .unwrap_or(token);

    if digits.is_empty() || !digits.chars().all(|c| ('0'..='7').contains(&c)) {
        return None;
    }

    Some(ParsedToken::Octal(digits.to_string()))
}

pub(super) fn digits_to_bytes(digits: &str) -> Vec<u8> {
    radix_digits_to_bytes(digits, 8)
}
