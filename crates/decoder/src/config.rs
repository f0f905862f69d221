//! Configuration for the streaming decoder.
//!
//! This module defines the structures used to parameterize a decode run. It provides:
//! 1. **Defaults:** Baseline behaviour that matches the plain command-line invocation.
//! 2. **Structures:** Hierarchical config for dispatch and output formatting.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Every field is optional in JSON; missing fields take their default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::isa::decode::Dialect;

/// Default configuration constants.
mod defaults {
    /// Flush the output after every decoded line.
    ///
    /// Interactive consumers (waveform viewers, pipes) see each mnemonic as
    /// soon as its token is read.
    pub const FLUSH_EACH_LINE: bool = true;
}

/// How mnemonic names are rendered on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// Canonical upper-case name (`BEQ`, `UNKN`).
    #[default]
    #[serde(alias = "Canonical")]
    Canonical,
    /// Historical text with in-band style markers (`?red?BEG`, `?red?UNKN`).
    #[serde(alias = "Legacy")]
    Legacy,
}

/// Root configuration for a decode run.
///
/// # Examples
///
/// ```
/// use rv32i_decoder::config::{Config, NameStyle};
/// use rv32i_decoder::isa::Dialect;
///
/// let json = r#"{
///     "decode": { "dialect": "legacy" },
///     "output": { "names": "legacy", "flush_each_line": false }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.decode.dialect, Dialect::Legacy);
/// assert_eq!(config.output.names, NameStyle::Legacy);
/// assert!(!config.output.flush_each_line);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Dispatch settings
    #[serde(default)]
    pub decode: DecodeConfig,
    /// Output formatting settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Dispatch settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DecodeConfig {
    /// Dispatch table variant (`"standard"` or `"legacy"`)
    #[serde(default)]
    pub dialect: Dialect,
}

/// Output formatting settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Name rendering (`"canonical"` or `"legacy"`)
    #[serde(default)]
    pub names: NameStyle,

    /// Flush after every line
    #[serde(default = "OutputConfig::default_flush_each_line")]
    pub flush_each_line: bool,
}

impl OutputConfig {
    /// Returns the default per-line flush setting.
    const fn default_flush_each_line() -> bool {
        defaults::FLUSH_EACH_LINE
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            names: NameStyle::default(),
            flush_each_line: defaults::FLUSH_EACH_LINE,
        }
    }
}
