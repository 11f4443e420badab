//! Configuration system for pathdict.
//!
//! This module provides the configuration structure for pathdict with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and can be overridden from the
//! command line.
//!
//! # Example
//!
//! ```
//! use pathdict::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.max_path_len, 4096);
//! assert_eq!(config.indent_size, 2);
//!
//! // Create custom configuration
//! let custom = Config {
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! assert!(custom.pretty);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Configuration for pathdict.
///
/// # Fields
///
/// * `max_path_len` - Longest path string accepted, in bytes (default: 4096)
/// * `indent_size` - Spaces per indentation level in saved JSON (default: 2)
/// * `pretty` - Pretty-print output instead of compact JSON (default: true)
/// * `create_backup` - Create .bak files before saving (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Longest path string accepted, in bytes
    #[serde(default = "default_max_path_len")]
    pub max_path_len: usize,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Pretty-print output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,
}

/// Returns the default path length limit.
///
/// Recursion depth grows with the number of segments, so untrusted paths
/// are capped.
fn default_max_path_len() -> usize {
    4096
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

fn default_pretty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_path_len: default_max_path_len(),
            indent_size: default_indent_size(),
            pretty: default_pretty(),
            create_backup: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/pathdict/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("pathdict");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|e| {
            warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
            Self::default()
        })
    }

    /// Loads configuration from an explicit file, failing on read or parse errors.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(config_path)
    }

    /// Saves configuration to an explicit file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = Config::from_toml("indent_size = 4").unwrap();
        assert_eq!(config.indent_size, 4);
        assert_eq!(config.max_path_len, 4096);
        assert!(config.pretty);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml("indent_size = \"wide\"").is_err());
    }
}
