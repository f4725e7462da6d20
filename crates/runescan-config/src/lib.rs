//! Runescan Config
//!
//! This crate handles configuration loading and management
//! for the `rscan` tool, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/runescan/config.toml`
//! - macOS: `~/Library/Application Support/runescan/config.toml`
//! - Windows: `%APPDATA%\runescan\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use runescan_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod output;
mod scan;

pub use output::{OutputConfig, OutputMode};
pub use scan::ScanConfig;

use runescan_core::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[output]
Mode    = "spans"
ShowEof = false
Offsets = true

[scan]
Start   = "0:1:1"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Scanner configuration
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[output]"));
    /// assert!(toml.contains("[scan]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "runescan")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| ScanError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ScanError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// The base config comes from the default location. If
    /// `override_config` names an existing file it is loaded and merged,
    /// otherwise it is parsed as inline TOML.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }
        Ok(config)
    }

    /// Parse an override given either as a file path or as inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.exists() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| ScanError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use runescan_config::{Config, OutputMode};
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [output]
    ///     Mode = "lines"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.output.mode, OutputMode::Lines);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.output.merge(&other.output);
        self.scan.merge(&other.scan);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ScanError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
