// SPDX-License-Identifier: Apache-2.0

use crate::shared::is_whitespace;

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
    /// Invalid slice bounds provided.
    InvalidSliceBounds,
}

/// A buffer that manages input data and current parsing position.
/// This encapsulates the data slice and position that are always used together.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// True once every byte of the input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Looks at the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// The unconsumed tail of the input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    /// Moves the position forward by `count` bytes.
    ///
    /// Fails without moving if that would step past the end of the data.
    pub fn advance(&mut self, count: usize) -> Result<(), Error> {
        let new_pos = self
            .pos
            .checked_add(count)
            .ok_or(Error::InvalidSliceBounds)?;
        if new_pos > self.data.len() {
            return Err(Error::ReachedEnd);
        }
        self.pos = new_pos;
        Ok(())
    }

    /// Skips JSON insignificant whitespace: space, tab, line feed, carriage return.
    pub fn skip_whitespace(&mut self) {
        let skipped = self
            .remaining()
            .iter()
            .take_while(|&&b| is_whitespace(b))
            .count();
        // Never past the end, the bytes were just counted from the tail
        self.pos += skipped;
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], Error> {
        self.data.get(start..end).ok_or(Error::InvalidSliceBounds)
    }
}
