//! Error definitions.
//!
//! Decoding itself never fails; the only fallible paths are the I/O around the
//! streaming adapter and loading a configuration file:
//! 1. **Stream errors:** Read or write failures while translating a token stream.
//! 2. **Config errors:** Unreadable or malformed JSON configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// I/O failure while streaming tokens through the decoder.
///
/// Malformed tokens are not errors; they are decoded on a best-effort basis
/// and reported through logging and statistics instead.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Reading from the input stream failed.
    #[error("failed to read instruction stream: {0}")]
    Read(#[source] io::Error),

    /// Writing or flushing the output stream failed.
    #[error("failed to write decoded mnemonic: {0}")]
    Write(#[source] io::Error),
}

impl StreamError {
    /// Returns `true` when the consumer closed the output early (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Failure loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file '{}': {source}", path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
