//! Line-break normalization for raw text slices.
//!
//! The scanner produces normalized characters one at a time. When a caller
//! asks for a slice of raw text, the same rules have to be applied to the
//! whole range at once.

use std::borrow::Cow;

/// Check whether `text` contains anything normalization would change.
pub(crate) fn needs_normalization(text: &str) -> bool {
    text.contains('\r') || text.contains("\\\n")
}

/// Apply normalization unconditionally.
///
/// CRLF must become LF before lone CR does, and both must happen before
/// escaped line breaks are removed, since a backslash may precede a CR.
pub(crate) fn normalize_owned(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("\\\n", "")
}

/// Normalize line breaks the way [`Scanner`](crate::Scanner) does.
///
/// CR and CRLF become LF, and every backslash directly followed by a line
/// break is removed together with the break. Text that needs no change is
/// returned borrowed.
///
/// # Example
///
/// ```
/// use runescan_scanner::normalize_line_breaks;
/// assert_eq!(normalize_line_breaks("a\r\nb\\\nc"), "a\nbc");
/// ```
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if needs_normalization(text) {
        Cow::Owned(normalize_owned(text))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        let out = normalize_line_breaks("hello\nworld");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "hello\nworld");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(normalize_line_breaks("a\rb"), "a\nb");
        assert_eq!(normalize_line_breaks("a\r\nb"), "a\nb");
        assert_eq!(normalize_line_breaks("a\nb\rc\r\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_line_breaks("\r\r\n"), "\n\n");
    }

    #[test]
    fn test_escaped_breaks() {
        assert_eq!(normalize_line_breaks("hello\\\nworld"), "helloworld");
        assert_eq!(normalize_line_breaks("a\\\rb"), "ab");
        assert_eq!(normalize_line_breaks("a\\\r\nb"), "ab");
        assert_eq!(normalize_line_breaks("\\\n\\\n"), "");
    }

    #[test]
    fn test_plain_backslash_kept() {
        assert_eq!(normalize_line_breaks("a\\b"), "a\\b");
        assert_eq!(normalize_line_breaks("a\\"), "a\\");
    }

    #[test]
    fn test_cr_before_lf_after_escape() {
        // The escape swallows the CR; the following LF survives
        assert_eq!(normalize_line_breaks("a\\\r\r\nb"), "a\nb");
    }
}
