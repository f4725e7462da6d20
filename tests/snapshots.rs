//! Snapshot tests for scanner span dumps.
//!
//! Each dump lists one span per line using the span's `Display` form.

use runescan_scanner::{Scanner, TextPosition};

/// Render every span of `text`, including the final end-of-input span.
fn dump(text: &str) -> String {
    dump_from(text, TextPosition::start())
}

fn dump_from(text: &str, start: TextPosition) -> String {
    let mut scanner = Scanner::new_at(text, start);
    let mut lines = Vec::new();
    loop {
        let span = scanner.pop_span();
        lines.push(format!("@{}..{} {}", span.start.offset, span.end.offset, span));
        if span.is_eof() {
            return lines.join("\n");
        }
    }
}

#[test]
fn test_snapshot_mixed_line_endings() {
    insta::assert_snapshot!(dump("a\nb\rc\r\nd"), @r"
@0..1 1:1-1:2 'a'
@1..2 1:2-2:1 '\n'
@2..3 2:1-2:2 'b'
@3..4 2:2-3:1 '\n'
@4..5 3:1-3:2 'c'
@5..7 3:2-4:1 '\n'
@7..8 4:1-4:2 'd'
@8..8 4:2 EOF
");
}

#[test]
fn test_snapshot_escaped_breaks() {
    insta::assert_snapshot!(dump("x\\\r\ny\\z\\"), @r"
@0..1 1:1-1:2 'x'
@1..5 1:2-2:2 'y'
@5..6 2:2-2:3 '\\'
@6..7 2:3-2:4 'z'
@7..8 2:4-2:5 '\\'
@8..8 2:5 EOF
");
}

#[test]
fn test_snapshot_unicode() {
    insta::assert_snapshot!(dump("é語🎉"), @r"
@0..2 1:1-1:2 'é'
@2..5 1:2-1:3 '語'
@5..9 1:3-1:4 '🎉'
@9..9 1:4 EOF
");
}

#[test]
fn test_snapshot_trailing_escape() {
    insta::assert_snapshot!(dump("ab\\\n"), @r"
@0..1 1:1-1:2 'a'
@1..2 1:2-1:3 'b'
@2..4 1:3 EOF
");
}

#[test]
fn test_snapshot_started_mid_text() {
    insta::assert_snapshot!(dump_from("skip\nkeep", TextPosition::new(5, 2, 1)), @r"
@5..6 2:1-2:2 'k'
@6..7 2:2-2:3 'e'
@7..8 2:3-2:4 'e'
@8..9 2:4-2:5 'p'
@9..9 2:5 EOF
");
}
