//! RV32I Opcode Dispatcher.
//!
//! Maps the `(opcode, funct3, bit30)` triple of an instruction word onto a
//! [`Mnemonic`]. The dispatch is a single exhaustive match over the triple;
//! every combination not listed resolves to [`Mnemonic::Unknown`], so decoding
//! is total over all 2^32 words.
//!
//! # Dialects
//!
//! Older tooling built on this table decoded every `OP_IMM` word with
//! `funct3 = 0b101` as ORI instead of SRLI / SRAI. That behaviour is kept as
//! [`Dialect::Legacy`] so its output can still be reproduced; the default
//! [`Dialect::Standard`] follows the ISA encoding.

use serde::Deserialize;

use crate::isa::instruction::{DecodedFields, extract};
use crate::isa::mnemonic::Mnemonic;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Which variant of the dispatch table to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// ISA encoding: `OP_IMM` / funct3 `0b101` is SRLI or SRAI by bit 30.
    #[default]
    #[serde(alias = "Standard")]
    Standard,
    /// Historical table: `OP_IMM` / funct3 `0b101` always decodes to ORI.
    #[serde(alias = "Legacy")]
    Legacy,
}

/// Decodes an instruction word into its mnemonic using the ISA encoding.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
///
/// # Returns
///
/// The recognised mnemonic, or [`Mnemonic::Unknown`].
#[inline]
pub fn decode(word: u32) -> Mnemonic {
    decode_with(word, Dialect::Standard)
}

/// Decodes an instruction word with an explicit dispatch dialect.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
/// * `dialect` - Which dispatch table variant to apply.
#[inline]
pub fn decode_with(word: u32, dialect: Dialect) -> Mnemonic {
    decode_fields(extract(word), dialect)
}

/// Dispatches an already extracted field triple.
///
/// Only `opcode`, `funct3` and `bit30` take part; the result is a pure
/// function of those three values and `dialect`.
pub const fn decode_fields(fields: DecodedFields, dialect: Dialect) -> Mnemonic {
    match (fields.opcode, fields.funct3, fields.bit30) {
        (opcodes::OP_LOAD, funct3::LB, _) => Mnemonic::Lb,
        (opcodes::OP_LOAD, funct3::LH, _) => Mnemonic::Lh,
        (opcodes::OP_LOAD, funct3::LW, _) => Mnemonic::Lw,
        (opcodes::OP_LOAD, funct3::LBU, _) => Mnemonic::Lbu,
        (opcodes::OP_LOAD, funct3::LHU, _) => Mnemonic::Lhu,

        (opcodes::OP_IMM, funct3::ADD_SUB, _) => Mnemonic::Addi,
        (opcodes::OP_IMM, funct3::SLL, funct7::DEFAULT) => Mnemonic::Slli,
        (opcodes::OP_IMM, funct3::SLT, _) => Mnemonic::Slti,
        (opcodes::OP_IMM, funct3::SLTU, _) => Mnemonic::Sltiu,
        (opcodes::OP_IMM, funct3::XOR, _) => Mnemonic::Xori,
        (opcodes::OP_IMM, funct3::SRL_SRA, alt) => match dialect {
            Dialect::Legacy => Mnemonic::Ori,
            Dialect::Standard if alt == funct7::SRA => Mnemonic::Srai,
            Dialect::Standard => Mnemonic::Srli,
        },
        (opcodes::OP_IMM, funct3::OR, _) => Mnemonic::Ori,
        (opcodes::OP_IMM, funct3::AND, _) => Mnemonic::Andi,

        (opcodes::OP_AUIPC, _, _) => Mnemonic::Auipc,

        (opcodes::OP_STORE, funct3::SB, _) => Mnemonic::Sb,
        (opcodes::OP_STORE, funct3::SH, _) => Mnemonic::Sh,
        (opcodes::OP_STORE, funct3::SW, _) => Mnemonic::Sw,

        (opcodes::OP_REG, funct3::ADD_SUB, funct7::DEFAULT) => Mnemonic::Add,
        (opcodes::OP_REG, funct3::SLL, funct7::DEFAULT) => Mnemonic::Sll,
        (opcodes::OP_REG, funct3::SLT, funct7::DEFAULT) => Mnemonic::Slt,
        (opcodes::OP_REG, funct3::SLTU, funct7::DEFAULT) => Mnemonic::Sltu,
        (opcodes::OP_REG, funct3::XOR, funct7::DEFAULT) => Mnemonic::Xor,
        (opcodes::OP_REG, funct3::SRL_SRA, funct7::DEFAULT) => Mnemonic::Srl,
        (opcodes::OP_REG, funct3::OR, funct7::DEFAULT) => Mnemonic::Or,
        (opcodes::OP_REG, funct3::AND, funct7::DEFAULT) => Mnemonic::And,
        (opcodes::OP_REG, funct3::ADD_SUB, funct7::SUB) => Mnemonic::Sub,
        (opcodes::OP_REG, funct3::SRL_SRA, funct7::SRA) => Mnemonic::Sra,

        (opcodes::OP_LUI, _, _) => Mnemonic::Lui,

        (opcodes::OP_BRANCH, funct3::BEQ, _) => Mnemonic::Beq,
        (opcodes::OP_BRANCH, funct3::BNE, _) => Mnemonic::Bne,
        (opcodes::OP_BRANCH, funct3::BLT, _) => Mnemonic::Blt,
        (opcodes::OP_BRANCH, funct3::BGE, _) => Mnemonic::Bge,
        (opcodes::OP_BRANCH, funct3::BLTU, _) => Mnemonic::Bltu,
        (opcodes::OP_BRANCH, funct3::BGEU, _) => Mnemonic::Bgeu,

        (opcodes::OP_JALR, funct3::JALR, _) => Mnemonic::Jalr,

        (opcodes::OP_JAL, _, _) => Mnemonic::Jal,

        _ => Mnemonic::Unknown,
    }
}
