// SPDX-License-Identifier: Apache-2.0

//! A tiny JSON parser for scalar documents.
//!
//! Recognizes `null`, `true`, `false` and numbers, with optional surrounding
//! whitespace, and reports the first grammar violation as a [`ParseError`].
//! The parser borrows its input, never allocates and keeps no state between
//! calls.
//!
//! ```
//! use minijson::{JsonType, JsonValue, ParseError};
//!
//! let mut value = JsonValue::default();
//! assert_eq!(minijson::parse(&mut value, " false "), Ok(()));
//! assert_eq!(value.get_type(), JsonType::False);
//!
//! assert_eq!(minijson::parse(&mut value, "1e400"), Err(ParseError::NumberTooBig));
//! assert_eq!(value.get_type(), JsonType::Null);
//! ```

#![cfg_attr(not(test), no_std)]

mod shared;

mod slice_input_buffer;

mod parse_error;
pub use parse_error::ParseError;

mod json_value;
pub use json_value::{JsonType, JsonValue};

mod literal_parser;

mod number_parser;

mod slice_parser;
pub use slice_parser::SliceParser;

/// Parses `input` as a single JSON value into `value`.
///
/// `value` is set to [`JsonValue::Null`] before parsing and is left `Null`
/// whenever an error is returned.
pub fn parse(value: &mut JsonValue, input: &str) -> Result<(), ParseError> {
    SliceParser::new(input).parse_into(value)
}

/// Byte slice variant of [`parse`].
pub fn parse_from_slice(value: &mut JsonValue, input: &[u8]) -> Result<(), ParseError> {
    SliceParser::new_from_slice(input).parse_into(value)
}
