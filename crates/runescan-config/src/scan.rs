//! Scanner configuration.

use serde::{Deserialize, Serialize};

use runescan_core::{Result, ScanError, TextPosition};

/// Scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanConfig {
    /// Starting position as `offset:line:column`.
    /// Default: "0:1:1"
    #[serde(default = "default_start")]
    pub start: String,
}

fn default_start() -> String {
    "0:1:1".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
        }
    }
}

impl ScanConfig {
    /// Parse the configured starting position.
    pub fn start_position(&self) -> Result<TextPosition> {
        self.start
            .parse()
            .map_err(|e: ScanError| ScanError::Config(format!("Start: {}", e)))
    }

    /// Merge another ScanConfig into this one.
    pub fn merge(&mut self, other: &ScanConfig) {
        self.start = other.start.clone();
    }
}
