//! Error types for runescan
//!
//! The scanner itself never fails; these errors belong to configuration
//! loading, input handling and position parsing.

use thiserror::Error;

/// Main error type for runescan operations
#[derive(Error, Debug)]
pub enum ScanError {
    /// IO error while reading input or configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed textual position
    #[error("Invalid position: {0}")]
    Position(String),
}

/// Result type alias for runescan operations
pub type Result<T> = std::result::Result<T, ScanError>;
