//! Common types shared by the decoder's front ends.
//!
//! This module provides:
//! 1. **Error Handling:** Stream and configuration error types.
//! 2. **Hex Parsing:** Best-effort conversion of text tokens into instruction words.

/// Error types for streaming and configuration.
pub mod error;

/// Hexadecimal token parsing.
pub mod hex;

pub use error::{ConfigError, StreamError};
pub use hex::{HexToken, parse_hex_token};
