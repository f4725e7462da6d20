//! Iteration helpers built on [`Scanner::pop_span`].
//!
//! None of these add behavior of their own. They produce exactly the spans
//! repeated `pop_span` calls would, stop at end of input and never yield the
//! end-of-input span itself.

use std::iter::FusedIterator;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use log::{debug, trace, warn};
use runescan_core::RuneSpan;

use crate::scanner::Scanner;

/// Pull-based iterator over the spans of a [`Scanner`].
///
/// Created by [`Scanner::spans`]. The scanner keeps its position when the
/// iterator is dropped early, so scanning can continue by hand.
#[derive(Debug)]
pub struct Spans<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl<'a> Scanner<'a> {
    /// Iterate over the remaining spans.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_scanner::Scanner;
    ///
    /// let mut scanner = Scanner::new("a\\\nb");
    /// let runes: String = scanner.spans().filter_map(|span| span.rune).collect();
    /// assert_eq!(runes, "ab");
    /// ```
    pub fn spans(&mut self) -> Spans<'_, 'a> {
        Spans { scanner: self }
    }
}

impl Iterator for Spans<'_, '_> {
    type Item = RuneSpan;

    fn next(&mut self) -> Option<RuneSpan> {
        let span = self.scanner.pop_span();
        if span.is_eof() {
            None
        } else {
            Some(span)
        }
    }
}

// Popping at end of input keeps producing end of input.
impl FusedIterator for Spans<'_, '_> {}

/// Call `f` for each span of `text` until it returns `false` or the text is
/// exhausted.
///
/// # Example
///
/// ```
/// use runescan_scanner::for_each;
///
/// let mut lines = 1;
/// for_each("a\r\nb\rc", |span| {
///     lines = span.end.line;
///     true
/// });
/// assert_eq!(lines, 3);
/// ```
pub fn for_each<F>(text: &str, mut f: F)
where
    F: FnMut(RuneSpan) -> bool,
{
    let mut scanner = Scanner::new(text);
    loop {
        let span = scanner.pop_span();
        if span.is_eof() || !f(span) {
            return;
        }
    }
}

/// Spans of a text produced on a background thread.
///
/// Created by [`stream`]. Production and consumption meet on a rendezvous
/// channel, so the producer is never more than one span ahead.
///
/// The producer cannot leak: once the stream is dropped, its next send fails
/// and the thread exits. [`SpanStream::cancel`] does the same but waits for
/// the thread to finish.
#[derive(Debug)]
pub struct SpanStream {
    receiver: Receiver<RuneSpan>,
    producer: JoinHandle<()>,
}

impl SpanStream {
    /// Stop consuming and wait for the producer thread to exit.
    pub fn cancel(self) {
        let SpanStream { receiver, producer } = self;
        drop(receiver);
        if producer.join().is_err() {
            warn!("span producer thread panicked");
        }
    }
}

impl Iterator for SpanStream {
    type Item = RuneSpan;

    fn next(&mut self) -> Option<RuneSpan> {
        self.receiver.recv().ok()
    }
}

/// Scan `text` on a background thread and hand its spans out one at a time.
///
/// # Example
///
/// ```
/// use runescan_scanner::stream;
///
/// let runes: Vec<char> = stream("x\r\ny").filter_map(|span| span.rune).collect();
/// assert_eq!(runes, vec!['x', '\n', 'y']);
/// ```
pub fn stream(text: impl Into<String>) -> SpanStream {
    let text = text.into();
    let (sender, receiver) = mpsc::sync_channel(0);

    let producer = thread::spawn(move || {
        let mut scanner = Scanner::new(&text);
        let mut sent = 0usize;
        loop {
            let span = scanner.pop_span();
            if span.is_eof() {
                trace!("span stream finished after {} spans", sent);
                return;
            }
            if sender.send(span).is_err() {
                debug!("span stream consumer went away after {} spans", sent);
                return;
            }
            sent += 1;
        }
    });

    SpanStream { receiver, producer }
}
