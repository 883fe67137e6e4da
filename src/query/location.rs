//! Position tracking for query source locations.
//!
//! Every token carries a start and end [`Position`] into the query string.
//! Positions follow text-editor conventions: `line` and `column` are
//! 1-based, a newline increments `line` and resets `column` to 1, and every
//! other character increments `column` by one. `offset` is the byte offset
//! into the input, so `end.offset - start.offset` equals the byte length of
//! a token's text. Columns count characters, not bytes, so a multi-byte
//! character advances `column` by one while advancing `offset` by its
//! encoded length.
//!
//! [`SourceMap`] converts byte offsets produced by the raw scanner into
//! positions. It pre-computes the byte offset of each line start once per
//! input and resolves individual offsets with a binary search over that
//! table, so conversion is O(log n) in the number of lines plus the length
//! of the resolved line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single point in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number, counted in characters.
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The position of the first character of the input.
    pub fn origin() -> Self {
        Self::new(0, 1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

/// Converts byte offsets into line/column positions for one query string.
pub struct SourceMap<'a> {
    source: &'a str,
    /// Byte offsets where each line starts.
    line_starts: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset into a position.
    ///
    /// The offset must lie on a character boundary and be at most
    /// `source.len()`; offsets produced by the scanner always are.
    pub fn position(&self, byte_offset: usize) -> Position {
        let line_index = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line_index];
        let column = self.source[line_start..byte_offset].chars().count() + 1;

        Position::new(byte_offset, line_index + 1, column)
    }

    /// The total number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
