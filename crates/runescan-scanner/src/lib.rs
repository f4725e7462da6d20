//! Runescan Scanner
//!
//! A character scanner for hand-written lexers and parsers that need exact
//! source positions.
//!
//! # Overview
//!
//! [`Scanner`] walks a piece of text one character at a time, reporting
//! every character together with its byte offset, line and column. Line
//! breaks are normalized as they are read: CR, LF and CRLF all come out as
//! `'\n'`, and a backslash directly before a line break hides both.
//!
//! Lexers typically [`mark`](Scanner::mark) the start of a token, pop until
//! the token ends, and take its text with [`slice`](Scanner::slice).
//!
//! # Example
//!
//! ```
//! use runescan_scanner::Scanner;
//!
//! let source = "let x = \\\r\n  42;";
//! let mut scanner = Scanner::new(source);
//!
//! while scanner.peek() != Some('=') {
//!     scanner.pop();
//! }
//! scanner.pop();
//! while scanner.peek() == Some(' ') {
//!     scanner.pop();
//! }
//!
//! scanner.mark();
//! let start = scanner.position();
//! while scanner.peek().is_some_and(|c| c != ';') {
//!     scanner.pop();
//! }
//!
//! // The escaped line break was skipped along with the spaces around it
//! assert_eq!(scanner.slice(), "42");
//! assert_eq!((start.line, start.column), (2, 3));
//! ```

pub mod iter;
pub mod normalize;
pub mod scanner;

pub use iter::{for_each, stream, SpanStream, Spans};
pub use normalize::normalize_line_breaks;
pub use runescan_core::{RuneSpan, TextPosition};
pub use scanner::Scanner;
