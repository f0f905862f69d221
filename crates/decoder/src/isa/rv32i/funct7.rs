//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! RV32I only ever sets bit 5 of `funct7` (instruction bit 30), so the decoder
//! looks at that single bit instead of the whole field.

/// Default operation (ADD, SRL, SRLI, SLLI).
pub const DEFAULT: u8 = 0;

/// Alternate operation.
/// Used to distinguish SUB from ADD, and SRA / SRAI from SRL / SRLI.
pub const ALT: u8 = 1;
/// Alias for ALT (Subtract).
pub const SUB: u8 = ALT;
/// Alias for ALT (Shift Right Arithmetic).
pub const SRA: u8 = ALT;
