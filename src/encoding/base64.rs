// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Base64 token grammar
//!
//! Standard alphabet with canonical `=` padding, as decoded by the
//! [`base64`] crate's strict engine. The decoded buffer is the byte
//! sequence itself; no numeric reinterpretation happens at parse time.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::ParsedToken;

pub(super) fn parse(token: &str) -> Option<ParsedToken> {
    if token.is_empty() {
        return None;
    }

    STANDARD.decode(token).ok().map(ParsedToken::Raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_canonical_tokens() {
        assert_eq!(
            parse("aGVsbG8="),
            Some(ParsedToken::Raw(b"hello".to_vec()))
        );
        assert_eq!(parse("/w=="), Some(ParsedToken::Raw(vec![0xff])));
    }

    #[test]
    fn rejects_missing_or_misplaced_padding() {
        assert!(parse("aGVsbG8").is_none());
        assert!(parse("a=bc").is_none());
    }

    #[test]
    fn rejects_out_of_alphabet_characters() {
        assert!(parse("aGV%bG8=").is_none());
        assert!(parse("").is_none());
    }
}
