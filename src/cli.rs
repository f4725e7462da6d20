//! Command-line interface for rscan.

use clap::Parser;
use std::path::PathBuf;

use runescan_config::{Config, OutputMode};
use runescan_core::{Result, TextPosition};

/// rscan - Dump what a line-normalizing scanner sees in a text.
///
/// Prints every character with its byte offset, line and column, the
/// logical lines of the text, or the normalized text itself.
#[derive(Parser, Debug)]
#[command(
    name = "rscan",
    author = "Runescan Contributors",
    version,
    about = "Dump characters, positions and logical lines of a text",
    after_help = "Examples:\n  \
                  cat source.c | rscan\n  \
                  rscan -m lines source.c\n  \
                  rscan --start=120:7:1 --show-eof tail.txt"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Output mode: spans, lines or chars
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<String>,

    /// Also print the end-of-input span (spans mode)
    #[arg(long = "show-eof")]
    pub show_eof: bool,

    /// Print line:column without byte offsets
    #[arg(long = "no-offsets")]
    pub no_offsets: bool,

    /// Starting position as offset:line:column
    #[arg(long = "start", value_name = "OFFSET:LINE:COLUMN")]
    pub start: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// The output mode, if given on the command line.
    pub fn parse_mode(&self) -> Result<Option<OutputMode>> {
        self.mode.as_deref().map(str::parse).transpose()
    }

    /// The starting position, if given on the command line.
    pub fn parse_start(&self) -> Result<Option<TextPosition>> {
        self.start.as_deref().map(str::parse).transpose()
    }
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
