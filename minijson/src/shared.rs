// SPDX-License-Identifier: Apache-2.0

/// Shared byte classification and conversion helpers for the parsers
use crate::ParseError;

/// JSON insignificant whitespace. Nothing else counts, not even form feed.
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

pub const fn is_digit_1to9(b: u8) -> bool {
    matches!(b, b'1'..=b'9')
}

/// Converts an already validated token to `&str`.
///
/// Tokens reaching this point are pure ASCII, so a failure means the caller
/// handed over bytes the lexer never accepted.
pub const fn from_utf8(v: &[u8]) -> Result<&str, ParseError> {
    match core::str::from_utf8(v) {
        Ok(s) => Ok(s),
        Err(_) => Err(ParseError::InvalidValue),
    }
}
