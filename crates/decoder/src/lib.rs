//! RV32I instruction decoder library.
//!
//! This crate maps raw 32-bit RISC-V base integer instruction words onto their
//! mnemonics. It provides:
//! 1. **ISA:** Field extraction, the opcode dispatcher, and the mnemonic display table.
//! 2. **Stream:** An adapter that turns a stream of hex tokens into mnemonic lines.
//! 3. **Config:** Dispatch dialect and output style, loadable from JSON.
//! 4. **Statistics:** Token quality and instruction-mix counters for a run.
//!
//! Decoding is pure and total: every `u32` maps to exactly one [`Mnemonic`].
//!
//! ```
//! use rv32i_decoder::{Mnemonic, decode};
//!
//! assert_eq!(decode(0x0000_0013), Mnemonic::Addi);
//! assert_eq!(decode(0x4000_0033), Mnemonic::Sub);
//! assert_eq!(decode(0xFFFF_FFFF), Mnemonic::Unknown);
//! ```

/// Common types (errors, hex token parsing).
pub mod common;
/// Decode run configuration (dialect, output style).
pub mod config;
/// Instruction set (fields, dispatch, mnemonic table).
pub mod isa;
/// Decode statistics collection and reporting.
pub mod stats;
/// Streaming adapter from hex tokens to mnemonic lines.
pub mod stream;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Dispatch entry points and their value types.
pub use crate::isa::{
    Dialect, Mnemonic, MnemonicEntry, StyleTag, decode, decode_with, display, extract,
};
