// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer;

/// Errors that can occur during JSON parsing
///
/// Exactly one of these is reported per failed parse, naming the first
/// grammar violation found. A failed parse always leaves the output value
/// as [`JsonValue::Null`](crate::JsonValue::Null).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// The input ended (after optional whitespace) where a value was expected.
    ExpectValue,
    /// A literal or number was malformed.
    InvalidValue,
    /// A valid value was followed by something other than whitespace.
    RootNotSingular,
    /// A number was syntactically valid but its magnitude overflows `f64`.
    NumberTooBig,
}

impl From<slice_input_buffer::Error> for ParseError {
    fn from(err: slice_input_buffer::Error) -> Self {
        match err {
            slice_input_buffer::Error::ReachedEnd => ParseError::ExpectValue,
            slice_input_buffer::Error::InvalidSliceBounds => ParseError::InvalidValue,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "root value is followed by extra content",
            ParseError::NumberTooBig => "number too big",
        };
        f.write_str(msg)
    }
}
