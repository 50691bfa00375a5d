// SPDX-License-Identifier: Apache-2.0

use crate::literal_parser::{parse_literal, Literal};
use crate::number_parser::parse_number;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::{JsonValue, ParseError};

/// A parser for a single JSON scalar document held in a slice.
///
/// The whole input must be exactly one value with optional surrounding
/// whitespace. The parser is consumed by parsing, so each document gets a
/// fresh cursor.
// Lifetime 'a is the input buffer lifetime
#[derive(Debug)]
pub struct SliceParser<'a> {
    buffer: SliceInputBuffer<'a>,
}

impl<'a> SliceParser<'a> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use minijson::{JsonValue, SliceParser};
    /// let parser = SliceParser::new(" true ");
    /// assert_eq!(parser.parse(), Ok(JsonValue::True));
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// # Example
    /// ```
    /// # use minijson::{JsonValue, SliceParser};
    /// let parser = SliceParser::new_from_slice(b"-0.5");
    /// assert_eq!(parser.parse(), Ok(JsonValue::Number(-0.5)));
    /// ```
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        SliceParser {
            buffer: SliceInputBuffer::new(input),
        }
    }

    /// Parses the document into a new value.
    pub fn parse(self) -> Result<JsonValue, ParseError> {
        let mut value = JsonValue::Null;
        self.parse_into(&mut value)?;
        Ok(value)
    }

    /// Parses the document into `value`.
    ///
    /// `value` is reset to [`JsonValue::Null`] first and stays `Null` on any
    /// error.
    pub fn parse_into(mut self, value: &mut JsonValue) -> Result<(), ParseError> {
        *value = JsonValue::Null;
        let result = self.parse_root(value);
        if let Err(e) = result {
            *value = JsonValue::Null;
            log::debug!("parse failed at byte {}: {}", self.buffer.current_pos(), e);
        }
        result
    }

    fn parse_root(&mut self, value: &mut JsonValue) -> Result<(), ParseError> {
        self.buffer.skip_whitespace();
        self.parse_value(value)?;
        // Trailing whitespace is skipped before the singular check
        self.buffer.skip_whitespace();
        if !self.buffer.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        log::trace!("parsed root value {:?}", value);
        Ok(())
    }

    /// Picks a sub-parser from the lookahead byte without consuming it.
    fn parse_value(&mut self, value: &mut JsonValue) -> Result<(), ParseError> {
        let lookahead = self.buffer.peek();
        log::trace!(
            "dispatching on {:?} at byte {}",
            lookahead.map(char::from),
            self.buffer.current_pos()
        );
        match lookahead {
            Some(b'n') => parse_literal(&mut self.buffer, value, Literal::Null),
            Some(b't') => parse_literal(&mut self.buffer, value, Literal::True),
            Some(b'f') => parse_literal(&mut self.buffer, value, Literal::False),
            None => Err(ParseError::ExpectValue),
            Some(_) => parse_number(&mut self.buffer, value),
        }
    }
}
