//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g., LB vs LH, BEQ vs BNE, ADD vs SLT).

/// Load Byte (signed).
pub const LB: u8 = 0b000;
/// Load Halfword (signed).
pub const LH: u8 = 0b001;
/// Load Word.
pub const LW: u8 = 0b010;
/// Load Byte Unsigned.
pub const LBU: u8 = 0b100;
/// Load Halfword Unsigned.
pub const LHU: u8 = 0b101;

/// Store Byte.
pub const SB: u8 = 0b000;
/// Store Halfword.
pub const SH: u8 = 0b001;
/// Store Word.
pub const SW: u8 = 0b010;

/// Branch Equal.
pub const BEQ: u8 = 0b000;
/// Branch Not Equal.
pub const BNE: u8 = 0b001;
/// Branch Less Than (signed).
pub const BLT: u8 = 0b100;
/// Branch Greater or Equal (signed).
pub const BGE: u8 = 0b101;
/// Branch Less Than Unsigned.
pub const BLTU: u8 = 0b110;
/// Branch Greater or Equal Unsigned.
pub const BGEU: u8 = 0b111;

/// Add / Subtract (and ADDI).
pub const ADD_SUB: u8 = 0b000;
/// Shift Left Logical (and SLLI).
pub const SLL: u8 = 0b001;
/// Set Less Than, signed (and SLTI).
pub const SLT: u8 = 0b010;
/// Set Less Than Unsigned (and SLTIU).
pub const SLTU: u8 = 0b011;
/// Bitwise XOR (and XORI).
pub const XOR: u8 = 0b100;
/// Shift Right Logical / Arithmetic (and SRLI / SRAI).
pub const SRL_SRA: u8 = 0b101;
/// Bitwise OR (and ORI).
pub const OR: u8 = 0b110;
/// Bitwise AND (and ANDI).
pub const AND: u8 = 0b111;

/// Jump and Link Register; the only funct3 defined for `OP_JALR`.
pub const JALR: u8 = 0b000;
