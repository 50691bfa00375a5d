// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::shared::{from_utf8, is_digit, is_digit_1to9};
use crate::slice_input_buffer::SliceInputBuffer;
use crate::{JsonValue, ParseError};

/// Trait for extracting number slices from different buffer implementations.
pub trait NumberExtractor {
    /// Extract a slice of bytes representing a number from start to end position.
    ///
    /// # Arguments
    /// * `start` - The starting position of the number (inclusive)
    /// * `end` - The ending position of the number (exclusive)
    fn get_number_slice(&self, start: usize, end: usize) -> Result<&[u8], ParseError>;

    /// Get the current position in the buffer, where a number would start.
    fn current_position(&self) -> usize;
}

impl NumberExtractor for SliceInputBuffer<'_> {
    fn get_number_slice(&self, start: usize, end: usize) -> Result<&[u8], ParseError> {
        Ok(self.slice(start, end)?)
    }

    fn current_position(&self) -> usize {
        self.current_pos()
    }
}

/// Validates the number grammar at the start of `bytes` and returns the token length.
///
/// ```text
/// number = [ "-" ] ( "0" / digit1-9 *digit ) [ "." 1*digit ] [ ( "e" / "E" ) [ "+" / "-" ] 1*digit ]
/// ```
///
/// The scan stops at the first byte that cannot extend the token, so `00`
/// yields a one byte token and leaves the second `0` to the caller.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let byte_at = |i: usize| bytes.get(i).copied();
    let mut pos = 0;

    if byte_at(pos) == Some(b'-') {
        pos += 1;
    }

    match byte_at(pos) {
        Some(b'0') => pos += 1,
        Some(b) if is_digit_1to9(b) => pos = skip_digits(bytes, pos + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if byte_at(pos) == Some(b'.') {
        pos += 1;
        if !byte_at(pos).is_some_and(is_digit) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(bytes, pos);
    }

    if matches!(byte_at(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(byte_at(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if !byte_at(pos).is_some_and(is_digit) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(bytes, pos);
    }

    Ok(pos)
}

fn skip_digits(bytes: &[u8], from: usize) -> usize {
    let run = bytes
        .get(from..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&b| is_digit(b))
        .count();
    from + run
}

/// Converts a validated number token with the standard library's float parser.
///
/// Overflow to infinity is reported as `NumberTooBig`. Underflow is not an
/// error and rounds toward zero.
pub fn convert_number(bytes: &[u8]) -> Result<f64, ParseError> {
    let s = from_utf8(bytes)?;
    let n = f64::from_str(s).map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(n)
}

/// Extracts the `start..end` token from `extractor` and converts it.
pub fn parse_number_span<T: NumberExtractor>(
    extractor: &T,
    start: usize,
    end: usize,
) -> Result<f64, ParseError> {
    let number_bytes = extractor.get_number_slice(start, end)?;
    convert_number(number_bytes)
}

/// Lexes and converts the number at the cursor, storing it into `value`.
///
/// The cursor only moves, and `value` is only written, when the whole token
/// is valid and finite.
pub fn parse_number(
    buffer: &mut SliceInputBuffer<'_>,
    value: &mut JsonValue,
) -> Result<(), ParseError> {
    let start = buffer.current_position();
    let len = scan_number(buffer.remaining())?;
    let n = parse_number_span(&*buffer, start, start + len)?;
    buffer.advance(len)?;
    *value = JsonValue::Number(n);
    Ok(())
}
