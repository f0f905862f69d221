//! RISC-V Base Integer Instruction Set (RV32I).
//!
//! Encoding constants for the 32-bit base integer instructions recognised by
//! the dispatcher.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: The single funct7 bit (instruction bit 30) the dispatcher inspects.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Bit 30 (funct7\[5\]) definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
