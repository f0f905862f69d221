//! Fluent construction of raw instruction words.
//!
//! Only the classification fields are meaningful to the decoder; everything
//! else is "noise" that tests vary to check the decoder ignores it.

/// Bits the decoder looks at: bit 30, funct3 (14..12) and opcode (6..0).
pub const CLASSIFICATION_MASK: u32 = 0x4000_707F;

/// Builds a 32-bit word from classification fields and noise bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u8,
    funct3: u8,
    bit30: u8,
    noise: u32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.opcode = opcode;
        self
    }

    pub fn funct3(mut self, funct3: u8) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn bit30(mut self, bit30: u8) -> Self {
        self.bit30 = bit30;
        self
    }

    /// Fills every non-classification bit from `noise`; classification bits
    /// of `noise` are discarded.
    pub fn noise(mut self, noise: u32) -> Self {
        self.noise = noise;
        self
    }

    pub fn build(self) -> u32 {
        (self.noise & !CLASSIFICATION_MASK)
            | (u32::from(self.bit30 & 1) << 30)
            | (u32::from(self.funct3 & 0x7) << 12)
            | u32::from(self.opcode & 0x7F)
    }
}
