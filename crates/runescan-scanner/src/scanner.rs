//! The character scanner.
//!
//! A [`Scanner`] is a cursor over a borrowed piece of text. It produces one
//! normalized character at a time and keeps byte offset, line and column in
//! step with every character it produces:
//!
//! - CR, LF and CRLF are all produced as a single `'\n'`.
//! - A backslash directly followed by a line break is skipped together with
//!   the break, and the first character of the next line is produced instead.
//!
//! The scanner never fails. Reading past the end, or from a position the
//! caller moved outside the text, produces `None`.

use std::borrow::Cow;

use log::trace;
use runescan_core::{RuneSpan, TextPosition};

use crate::normalize::{needs_normalization, normalize_owned};

/// Everything a pop may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    position: TextPosition,
    /// Set once a CR, CRLF or escaped line break was produced since the last mark
    dirty: bool,
}

/// A cursor over a piece of text.
///
/// # Example
///
/// ```
/// use runescan_scanner::Scanner;
///
/// let mut scanner = Scanner::new("a\r\nb");
/// assert_eq!(scanner.pop(), Some('a'));
/// assert_eq!(scanner.pop(), Some('\n'));
/// assert_eq!(scanner.position().offset, 3);
/// assert_eq!(scanner.pop(), Some('b'));
/// assert_eq!(scanner.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    state: State,
    marked: TextPosition,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self::new_at(text, TextPosition::start())
    }

    /// Create a scanner positioned at `start`.
    ///
    /// `start` is trusted: nothing checks that scanning `text` from the
    /// beginning would actually arrive at that line and column. It also
    /// becomes the initial mark.
    pub fn new_at(text: &'a str, start: TextPosition) -> Self {
        Self {
            text,
            state: State {
                position: start,
                dirty: false,
            },
            marked: start,
        }
    }

    /// The text being scanned.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The current position.
    pub fn position(&self) -> TextPosition {
        self.state.position
    }

    /// Move the scanner to `position`.
    ///
    /// No clamping is done and the mark is left where it is. A position
    /// outside the text simply puts the scanner at end of input.
    pub fn set_position(&mut self, position: TextPosition) {
        if position.offset < 0 || position.offset as usize > self.text.len() {
            trace!(
                "scanner moved outside text: offset {} (length {})",
                position.offset,
                self.text.len()
            );
        }
        self.state.position = position;
    }

    /// Whether the scanner has moved past the end of the input.
    ///
    /// Negative offsets count as being at the end.
    pub fn is_at_end(&self) -> bool {
        self.index().is_none()
    }

    /// Byte index of the current position, if it lies inside the text.
    fn index(&self) -> Option<usize> {
        usize::try_from(self.state.position.offset)
            .ok()
            .filter(|&idx| idx < self.text.len())
    }

    /// Decode the character starting at byte `idx`.
    ///
    /// An index inside a multi-byte sequence decodes as U+FFFD one byte wide.
    fn decode_at(&self, idx: usize) -> (char, usize) {
        match self.text.get(idx..).and_then(|rest| rest.chars().next()) {
            Some(c) => (c, c.len_utf8()),
            None => (char::REPLACEMENT_CHARACTER, 1),
        }
    }

    fn break_line(&mut self) {
        self.state.position.line += 1;
        self.state.position.column = 1;
    }

    /// Produce the character at the current position and advance past it.
    ///
    /// Returns `None` once the end of the text is reached; further calls keep
    /// returning `None` without moving.
    pub fn pop(&mut self) -> Option<char> {
        loop {
            let idx = self.index()?;
            let (c, width) = self.decode_at(idx);

            self.state.position.offset += width as isize;
            self.state.position.column += 1;

            match c {
                '\n' => {
                    self.break_line();
                    return Some('\n');
                }
                '\r' => {
                    self.break_line();
                    self.state.dirty = true;

                    // CRLF is one break
                    if let Some(next) = self.index() {
                        if self.text.as_bytes()[next] == b'\n' {
                            self.state.position.offset += 1;
                        }
                    }
                    return Some('\n');
                }
                '\\' => {
                    let saved = self.state;
                    if self.pop() == Some('\n') {
                        // Escaped line break: both vanish, produce what follows
                        self.state.dirty = true;
                        continue;
                    }
                    self.state = saved;
                    return Some('\\');
                }
                c => return Some(c),
            }
        }
    }

    /// Like [`pop`](Self::pop), but returns the character with its extent.
    pub fn pop_span(&mut self) -> RuneSpan {
        let start = self.state.position;
        let rune = self.pop();
        RuneSpan::new(rune, start, self.state.position)
    }

    /// The character [`pop`](Self::pop) would produce, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.clone().pop()
    }

    /// Like [`peek`](Self::peek), but returns the character with its extent.
    pub fn peek_span(&self) -> RuneSpan {
        self.clone().pop_span()
    }

    /// Consume the current character and return the one after it, without
    /// consuming that one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        self.pop();
        self.peek()
    }

    /// Like [`next`](Self::next), but returns the character with its extent.
    pub fn next_span(&mut self) -> RuneSpan {
        self.pop();
        self.peek_span()
    }

    /// Make the current position the start of the next slice.
    pub fn mark(&mut self) {
        self.marked = self.state.position;
        self.state.dirty = false;
    }

    /// The position last recorded by [`mark`](Self::mark).
    pub fn marked(&self) -> TextPosition {
        self.marked
    }

    /// Normalized text from the mark (inclusive) to the current position
    /// (exclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_scanner::Scanner;
    ///
    /// let mut scanner = Scanner::new("one\\\ntwo three");
    /// scanner.mark();
    /// while scanner.peek() != Some(' ') {
    ///     scanner.pop();
    /// }
    /// assert_eq!(scanner.slice(), "onetwo");
    /// ```
    pub fn slice(&self) -> Cow<'a, str> {
        self.slice_to(self.state.position.offset, self.state.dirty)
    }

    /// Normalized text from the mark (inclusive) through the character at
    /// the current position (inclusive).
    pub fn slice_inclusive(&self) -> Cow<'a, str> {
        let mut probe = self.clone();
        probe.pop();
        self.slice_to(probe.state.position.offset, probe.state.dirty)
    }

    fn slice_to(&self, end: isize, dirty: bool) -> Cow<'a, str> {
        let len = self.text.len();
        let start = match usize::try_from(self.marked.offset) {
            Ok(start) if start < len => start,
            _ => return Cow::Borrowed(""),
        };
        let end = usize::try_from(end).unwrap_or(0).min(len);
        if end <= start {
            return Cow::Borrowed("");
        }

        let raw = match self.text.get(start..end) {
            Some(raw) => Cow::Borrowed(raw),
            None => String::from_utf8_lossy(&self.text.as_bytes()[start..end]),
        };

        if dirty && needs_normalization(&raw) {
            Cow::Owned(normalize_owned(&raw))
        } else {
            raw
        }
    }
}
