//! Instruction field extraction.
//!
//! Splits a raw 32-bit RV32I encoding into the three bitfields that drive
//! mnemonic classification: the major opcode, `funct3`, and bit 30.
//!
//! ```text
//!  3         2         1         0
//! 10987654321098765432109876543210
//!  X                                  bit 30       >> 30
//!                  FFF                funct3       >> 12
//!                          OOOOOOO    opcode
//! ```

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit shift for the funct3 field (bits 12-14).
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit mask for extracting the funct3 field once shifted.
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit position of funct7\[5\], the ADD/SUB and SRL/SRA discriminator.
pub const BIT30_SHIFT: u32 = 30;
/// Bit mask for extracting bit 30 once shifted.
pub const BIT30_MASK: u32 = 0x1;

/// Trait for extracting classification fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode selects the major instruction class. Returns the 7-bit value.
    fn opcode(&self) -> u8;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u8;

    /// Extracts bit 30 (funct7\[5\]).
    ///
    /// Returns `1` for the alternate encodings (SUB, SRA, SRAI), `0` otherwise.
    fn bit30(&self) -> u8;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        (self & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn funct3(&self) -> u8 {
        ((self >> FUNCT3_SHIFT) & FUNCT3_MASK) as u8
    }

    #[inline(always)]
    fn bit30(&self) -> u8 {
        ((self >> BIT30_SHIFT) & BIT30_MASK) as u8
    }
}

/// The fields of an instruction word that the dispatcher looks at.
///
/// A pure projection of the raw word; every other bit (register indices,
/// immediates, the rest of funct7) is discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodedFields {
    /// funct7\[5\], either 0 or 1.
    pub bit30: u8,
    /// Minor opcode, 0..=7.
    pub funct3: u8,
    /// Major opcode, 0..=0x7F.
    pub opcode: u8,
}

impl DecodedFields {
    /// Builds a field triple directly, masking each value to its field width.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Major opcode (low 7 bits kept).
    /// * `funct3` - Minor opcode (low 3 bits kept).
    /// * `bit30` - Alternate-encoding bit (low bit kept).
    pub const fn new(opcode: u8, funct3: u8, bit30: u8) -> Self {
        Self {
            bit30: bit30 & BIT30_MASK as u8,
            funct3: funct3 & FUNCT3_MASK as u8,
            opcode: opcode & OPCODE_MASK as u8,
        }
    }

    /// Re-encodes the triple into the lowest word carrying exactly these fields.
    ///
    /// All bits outside positions 30, 14..12 and 6..0 are zero.
    pub const fn to_word(self) -> u32 {
        ((self.bit30 as u32) << BIT30_SHIFT)
            | ((self.funct3 as u32) << FUNCT3_SHIFT)
            | self.opcode as u32
    }
}

impl From<u32> for DecodedFields {
    fn from(word: u32) -> Self {
        extract(word)
    }
}

/// Extracts the classification fields from a 32-bit instruction word.
///
/// Total and side-effect free.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
#[inline]
pub fn extract(word: u32) -> DecodedFields {
    DecodedFields {
        bit30: word.bit30(),
        funct3: word.funct3(),
        opcode: word.opcode(),
    }
}
