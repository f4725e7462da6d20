//! Rendering scanner output for the terminal.

use std::io::{self, Write};

use runescan_config::{Config, OutputMode};
use runescan_core::{Result, RuneSpan, TextPosition};
use runescan_scanner::Scanner;

use crate::cli::Cli;

/// Resolved output settings: config file values with CLI overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    pub mode: OutputMode,
    pub show_eof: bool,
    pub offsets: bool,
    pub start: TextPosition,
}

impl DumpOptions {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let start = match cli.parse_start()? {
            Some(start) => start,
            None => config.scan.start_position()?,
        };

        Ok(Self {
            mode: cli.parse_mode()?.unwrap_or(config.output.mode),
            show_eof: cli.show_eof || config.output.show_eof,
            offsets: config.output.offsets && !cli.no_offsets,
            start,
        })
    }
}

fn format_position(pos: TextPosition, offsets: bool) -> String {
    if offsets {
        format!("{}@{}", pos, pos.offset)
    } else {
        pos.to_string()
    }
}

fn format_span(span: &RuneSpan, offsets: bool) -> String {
    let start = format_position(span.start, offsets);
    match span.rune {
        Some(c) => format!("{}\t{}\t{:?}", start, format_position(span.end, offsets), c),
        None => format!("{}\tEOF", start),
    }
}

/// Write the scan of `text` to `out` according to `options`.
pub fn dump<W: Write>(text: &str, options: &DumpOptions, out: &mut W) -> io::Result<()> {
    let mut scanner = Scanner::new_at(text, options.start);
    match options.mode {
        OutputMode::Spans => write_spans(&mut scanner, options, out),
        OutputMode::Lines => write_lines(&mut scanner, options, out),
        OutputMode::Chars => {
            for span in scanner.spans() {
                if let Some(c) = span.rune {
                    write!(out, "{}", c)?;
                }
            }
            Ok(())
        }
    }
}

fn write_spans<W: Write>(
    scanner: &mut Scanner<'_>,
    options: &DumpOptions,
    out: &mut W,
) -> io::Result<()> {
    loop {
        let span = scanner.pop_span();
        if span.is_eof() {
            if options.show_eof {
                writeln!(out, "{}", format_span(&span, options.offsets))?;
            }
            return Ok(());
        }
        writeln!(out, "{}", format_span(&span, options.offsets))?;
    }
}

/// One output line per logical line, taken with mark/slice so that
/// escaped line breaks join physical lines.
fn write_lines<W: Write>(
    scanner: &mut Scanner<'_>,
    options: &DumpOptions,
    out: &mut W,
) -> io::Result<()> {
    loop {
        scanner.mark();
        let start = scanner.position();

        let mut consumed = false;
        while let Some(c) = scanner.peek() {
            if c == '\n' {
                break;
            }
            scanner.pop();
            consumed = true;
        }

        let line = scanner.slice();
        let had_break = scanner.pop() == Some('\n');
        if !consumed && !had_break {
            return Ok(());
        }
        writeln!(out, "{}\t{}", format_position(start, options.offsets), line)?;
    }
}
