//! Output configuration.
//!
//! This module contains the `OutputConfig` struct which controls how
//! `rscan` prints what the scanner produced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use runescan_core::ScanError;

/// What `rscan` prints for each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One line per scanned character, with its positions
    Spans,
    /// One line per logical line, prefixed by its starting position
    Lines,
    /// The normalized text
    Chars,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Spans => write!(f, "spans"),
            OutputMode::Lines => write!(f, "lines"),
            OutputMode::Chars => write!(f, "chars"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spans" => Ok(OutputMode::Spans),
            "lines" => Ok(OutputMode::Lines),
            "chars" => Ok(OutputMode::Chars),
            other => Err(ScanError::Config(format!("unknown output mode {:?}", other))),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Output mode.
    /// Default: spans
    #[serde(default = "default_mode")]
    pub mode: OutputMode,

    /// Print the end-of-input span in spans mode.
    /// Default: false
    #[serde(default)]
    pub show_eof: bool,

    /// Include byte offsets next to line:column pairs.
    /// Default: true
    #[serde(default = "default_true")]
    pub offsets: bool,
}

fn default_mode() -> OutputMode {
    OutputMode::Spans
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Spans,
            show_eof: false,
            offsets: true,
        }
    }
}

impl OutputConfig {
    /// Merge another OutputConfig into this one.
    ///
    /// TOML can't tell "not set" from "set to the default", so every
    /// field is taken from `other`.
    pub fn merge(&mut self, other: &OutputConfig) {
        self.mode = other.mode;
        self.show_eof = other.show_eof;
        self.offsets = other.offsets;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(OutputMode::Spans.to_string(), "spans");
        assert_eq!(OutputMode::Lines.to_string(), "lines");
        assert_eq!(OutputMode::Chars.to_string(), "chars");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("spans".parse::<OutputMode>().unwrap(), OutputMode::Spans);
        assert_eq!("LINES".parse::<OutputMode>().unwrap(), OutputMode::Lines);
        assert!("tokens".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_partial_section() {
        let config: OutputConfig = toml::from_str("ShowEof = true").unwrap();
        assert!(config.show_eof);
        assert!(config.offsets);
        assert_eq!(config.mode, OutputMode::Spans);
    }
}
