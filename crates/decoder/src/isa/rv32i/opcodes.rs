//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) for the RV32I base integer instruction set.

/// Load instructions (LB, LH, LW, LBU, LHU).
pub const OP_LOAD: u8 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u8 = 0b0010011;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u8 = 0b0010111;

/// Store instructions (SB, SH, SW).
pub const OP_STORE: u8 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u8 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u8 = 0b0110111;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u8 = 0b1100011;

/// Jump and Link Register (JALR).
pub const OP_JALR: u8 = 0b1100111;

/// Jump and Link (JAL).
pub const OP_JAL: u8 = 0b1101111;
