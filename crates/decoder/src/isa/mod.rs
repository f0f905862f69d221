//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I encoding constants, field extraction, the opcode
//! dispatcher, and the mnemonic display table.
//!
//! Data flows one way: a raw word goes through [`instruction::extract`], the
//! resulting fields through [`decode::decode_fields`], and the mnemonic through
//! [`mnemonic::display`] when a printable name is needed.

/// Opcode dispatcher mapping instruction words to mnemonics.
pub mod decode;

/// Instruction field extraction (opcode, funct3, bit 30).
pub mod instruction;

/// Mnemonic enumeration and its display table.
pub mod mnemonic;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

pub use decode::{Dialect, decode, decode_fields, decode_with};
pub use instruction::{DecodedFields, InstructionBits, extract};
pub use mnemonic::{Mnemonic, MnemonicEntry, StyleTag, display};
