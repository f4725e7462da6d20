//! Position and span types for scanned text.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A position within a piece of text.
///
/// `offset` is signed: a scanner may be moved to a negative offset, which
/// it treats as being at the end of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextPosition {
    /// Offset in bytes from the beginning of the text (0-based)
    pub offset: isize,
    /// Line number (1-based), one more than the line breaks produced so far
    pub line: usize,
    /// Column number (1-based), one more than the characters since the last line break
    pub column: usize,
}

impl TextPosition {
    /// Create a position from its three components.
    pub fn new(offset: isize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The position of the first character of a text.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_core::TextPosition;
    /// let pos = TextPosition::start();
    /// assert_eq!((pos.offset, pos.line, pos.column), (0, 1, 1));
    /// ```
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Parses the `offset:line:column` form.
impl FromStr for TextPosition {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 3 {
            return Err(ScanError::Position(format!(
                "expected offset:line:column, got {:?}",
                s
            )));
        }

        let offset = parts[0]
            .parse()
            .map_err(|e| ScanError::Position(format!("offset {:?}: {}", parts[0], e)))?;
        let line = parts[1]
            .parse()
            .map_err(|e| ScanError::Position(format!("line {:?}: {}", parts[1], e)))?;
        let column = parts[2]
            .parse()
            .map_err(|e| ScanError::Position(format!("column {:?}: {}", parts[2], e)))?;

        Ok(Self::new(offset, line, column))
    }
}

/// A character within text, including the matching positional data.
///
/// `rune` is `None` for the end-of-input span, in which case
/// `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuneSpan {
    /// The character, or `None` at end of input
    pub rune: Option<char>,
    /// Position of the character
    pub start: TextPosition,
    /// Position one after the character
    pub end: TextPosition,
}

impl RuneSpan {
    /// Create a new span
    pub fn new(rune: Option<char>, start: TextPosition, end: TextPosition) -> Self {
        Self { rune, start, end }
    }

    /// Whether this span marks the end of input.
    pub fn is_eof(&self) -> bool {
        self.rune.is_none()
    }

    /// Number of raw bytes covered by the span.
    ///
    /// This differs from the UTF-8 width of `rune` when line breaks or
    /// escaped line breaks were normalized away.
    pub fn byte_len(&self) -> usize {
        usize::try_from(self.end.offset - self.start.offset).unwrap_or(0)
    }
}

impl fmt::Display for RuneSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rune {
            Some(c) => write!(f, "{}-{} {:?}", self.start, self.end, c),
            None => write!(f, "{} EOF", self.start),
        }
    }
}
