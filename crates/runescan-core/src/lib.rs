//! Runescan Core
//!
//! This crate provides the position types and error definitions
//! shared by the runescan scanner, its configuration and the CLI.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`TextPosition`] - Byte offset, line and column of a point in the text
//! - [`RuneSpan`] - A scanned character together with its source extent
//! - [`ScanError`] - Error types for the fallible outer surfaces

pub mod error;
pub mod types;

pub use error::{Result, ScanError};
pub use types::{RuneSpan, TextPosition};
