//! # ISA Unit Tests
//!
//! Covers field extraction, opcode dispatch, and the mnemonic table.

/// Dispatcher properties over arbitrary words.
///
/// Verifies totality, independence from non-classification bits, and
/// determinism with `proptest`.
pub mod decode_properties;



/// Mnemonic display table layout and styling.
pub mod mnemonic_table;
