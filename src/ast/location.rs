//! Byte offset to line/column conversion for error reporting.
//!
//! Parsers work in byte offsets into the source text. When an error is reported the offset
//! is converted once with [`SourceLocation`], which pre-computes the byte offset of every
//! line start and binary-searches it:
//!
//! ```text
//! Source: "Bone0{A\n0,0"
//!   line_starts = [0, 8]
//!   byte_to_position(10) -> line 1, column 2
//! ```
//!
//! Lines and columns are 0-based; columns count bytes.

use serde::Serialize;
use std::fmt;

/// A point in the source: byte offset plus its line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
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
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
    len: usize,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the end.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.len);
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(byte_offset, line, column)
    }
}
