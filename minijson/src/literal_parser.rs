// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer::SliceInputBuffer;
use crate::{JsonValue, ParseError};

/// The three keyword literals of JSON.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Literal::Null => b"null",
            Literal::True => b"true",
            Literal::False => b"false",
        }
    }

    pub const fn value(&self) -> JsonValue {
        match self {
            Literal::Null => JsonValue::Null,
            Literal::True => JsonValue::True,
            Literal::False => JsonValue::False,
        }
    }
}

/// Matches `literal` at the cursor and stores its value.
///
/// The caller has already seen the literal's first byte at the cursor. On
/// mismatch, including input that ends partway through, nothing is written
/// and the cursor is left where it was.
pub fn parse_literal(
    buffer: &mut SliceInputBuffer<'_>,
    value: &mut JsonValue,
    literal: Literal,
) -> Result<(), ParseError> {
    let expected = literal.as_bytes();
    debug_assert_eq!(buffer.peek(), expected.first().copied());

    if !buffer.remaining().starts_with(expected) {
        return Err(ParseError::InvalidValue);
    }
    buffer.advance(expected.len())?;
    *value = literal.value();
    Ok(())
}
