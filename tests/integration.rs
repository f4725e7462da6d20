//! Integration tests for runescan.
//!
//! These tests drive the scanner the way a hand-written lexer would and
//! check positions, normalization and slicing end to end.

use runescan_scanner::{for_each, normalize_line_breaks, stream, RuneSpan, Scanner, TextPosition};

fn pos(offset: isize, line: usize, column: usize) -> TextPosition {
    TextPosition::new(offset, line, column)
}

/// A token as a tiny word lexer sees it.
#[derive(Debug, PartialEq)]
struct Word {
    text: String,
    start: TextPosition,
    end: TextPosition,
}

/// Split `source` into whitespace separated words using mark/slice.
fn words(source: &str) -> Vec<Word> {
    let mut scanner = Scanner::new(source);
    let mut words = Vec::new();

    loop {
        while scanner.peek().is_some_and(char::is_whitespace) {
            scanner.pop();
        }
        if scanner.peek().is_none() {
            return words;
        }

        scanner.mark();
        while scanner.peek().is_some_and(|c| !c.is_whitespace()) {
            scanner.pop();
        }
        words.push(Word {
            text: scanner.slice().into_owned(),
            start: scanner.marked(),
            end: scanner.position(),
        });
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_crlf_span_sequence() {
    let mut scanner = Scanner::new("a\r\nb");
    let spans: Vec<RuneSpan> = (0..4).map(|_| scanner.pop_span()).collect();

    assert_eq!(
        spans,
        vec![
            RuneSpan::new(Some('a'), pos(0, 1, 1), pos(1, 1, 2)),
            RuneSpan::new(Some('\n'), pos(1, 1, 2), pos(3, 2, 1)),
            RuneSpan::new(Some('b'), pos(3, 2, 1), pos(4, 2, 2)),
            RuneSpan::new(None, pos(4, 2, 2), pos(4, 2, 2)),
        ]
    );
}

#[test]
fn test_line_break_variants_agree() {
    for input in ["a\rb", "a\nb", "a\r\nb"] {
        let mut scanner = Scanner::new(input);
        assert_eq!(scanner.pop(), Some('a'));
        assert_eq!(scanner.pop(), Some('\n'));
        let after = scanner.position();
        assert_eq!((after.line, after.column), (2, 1), "input {:?}", input);
        assert_eq!(scanner.pop(), Some('b'));
        assert_eq!(scanner.pop(), None);
    }
}

#[test]
fn test_escaped_break_slice() {
    let mut scanner = Scanner::new("hello\\\nworld");
    scanner.mark();
    for _ in 0..11 {
        scanner.pop();
    }
    assert_eq!(scanner.slice(), "helloworld");
    assert!(scanner.is_at_end());
}

#[test]
fn test_words_with_continuations() {
    let source = "fn main\\\n() {\r\n  x\\\r\ny\n}";
    let found = words(source);
    let texts: Vec<&str> = found.iter().map(|w| w.text.as_str()).collect();

    assert_eq!(texts, vec!["fn", "main()", "{", "xy", "}"]);
    assert_eq!(found[1].start, pos(3, 1, 4));
    assert_eq!(found[1].end, pos(11, 2, 3));
    assert_eq!(found[3].start, pos(17, 3, 3));
    assert_eq!(found[4].start, pos(23, 5, 1));
}

#[test]
fn test_resume_from_saved_position() {
    let source = "alpha\nbeta\ngamma";
    let mut scanner = Scanner::new(source);
    while scanner.pop() != Some('\n') {}
    let saved = scanner.position();

    let mut resumed = Scanner::new_at(source, saved);
    let rest: String = resumed.spans().filter_map(|s| s.rune).collect();
    assert_eq!(rest, "beta\ngamma");
    assert_eq!(resumed.position(), pos(16, 3, 6));
}

#[test]
fn test_helpers_agree() {
    let source = "one\r\ntwo\\\nthree\\four\rfive";

    let mut scanner = Scanner::new(source);
    let pulled: Vec<RuneSpan> = scanner.spans().collect();

    let mut pushed = Vec::new();
    for_each(source, |span| {
        pushed.push(span);
        true
    });

    let streamed: Vec<RuneSpan> = stream(source).collect();

    assert_eq!(pulled, pushed);
    assert_eq!(pulled, streamed);

    let text: String = pulled.iter().filter_map(|s| s.rune).collect();
    assert_eq!(text, normalize_line_breaks(source));
}

#[test]
fn test_slice_inclusive_grows_by_one_char() {
    let mut scanner = Scanner::new("αβ\r\nγ");
    scanner.mark();
    scanner.pop();
    assert_eq!(scanner.slice(), "α");
    assert_eq!(scanner.slice_inclusive(), "αβ");
    scanner.pop();
    assert_eq!(scanner.slice_inclusive(), "αβ\n");
    scanner.pop();
    assert_eq!(scanner.slice(), "αβ\n");
    assert_eq!(scanner.slice_inclusive(), "αβ\nγ");
}
