//! Mnemonic variants and their display table.
//!
//! Every RV32I operation the dispatcher recognises is a variant of the closed
//! [`Mnemonic`] enumeration. The display table is a `static` array indexed by
//! the variant's discriminant, so lookups are constant-time and can never fall
//! outside the table.

use std::fmt;

/// Symbolic name of a decoded RV32I instruction.
///
/// `Unknown` is the catch-all for any encoding the dispatcher does not
/// recognise. Discriminants follow table order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mnemonic {
    /// Unrecognised encoding.
    #[default]
    Unknown = 0,
    /// Load Upper Immediate.
    Lui,
    /// Add Upper Immediate to PC.
    Auipc,
    /// Jump and Link.
    Jal,
    /// Jump and Link Register.
    Jalr,
    /// Branch Equal.
    Beq,
    /// Branch Not Equal.
    Bne,
    /// Branch Less Than.
    Blt,
    /// Branch Greater or Equal.
    Bge,
    /// Branch Less Than Unsigned.
    Bltu,
    /// Branch Greater or Equal Unsigned.
    Bgeu,
    /// Add Immediate.
    Addi,
    /// Load Word.
    Lw,
    /// Load Halfword.
    Lh,
    /// Load Byte.
    Lb,
    /// Load Halfword Unsigned.
    Lhu,
    /// Load Byte Unsigned.
    Lbu,
    /// Store Word.
    Sw,
    /// Store Halfword.
    Sh,
    /// Store Byte.
    Sb,
    /// Set Less Than Immediate.
    Slti,
    /// Set Less Than Immediate Unsigned.
    Sltiu,
    /// XOR Immediate.
    Xori,
    /// OR Immediate.
    Ori,
    /// AND Immediate.
    Andi,
    /// Shift Left Logical Immediate.
    Slli,
    /// Shift Right Logical Immediate.
    Srli,
    /// Shift Right Arithmetic Immediate.
    Srai,
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Shift Left Logical.
    Sll,
    /// Set Less Than.
    Slt,
    /// Set Less Than Unsigned.
    Sltu,
    /// Exclusive OR.
    Xor,
    /// Shift Right Logical.
    Srl,
    /// Shift Right Arithmetic.
    Sra,
    /// OR.
    Or,
    /// AND.
    And,
}

impl Mnemonic {
    /// Number of variants, including `Unknown`.
    pub const COUNT: usize = Self::And as usize + 1;

    /// Every variant in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Unknown,
        Self::Lui,
        Self::Auipc,
        Self::Jal,
        Self::Jalr,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bge,
        Self::Bltu,
        Self::Bgeu,
        Self::Addi,
        Self::Lw,
        Self::Lh,
        Self::Lb,
        Self::Lhu,
        Self::Lbu,
        Self::Sw,
        Self::Sh,
        Self::Sb,
        Self::Slti,
        Self::Sltiu,
        Self::Xori,
        Self::Ori,
        Self::Andi,
        Self::Slli,
        Self::Srli,
        Self::Srai,
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
    ];

    /// Position of this variant in the display table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical upper-case name, e.g. `"ADDI"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        display(self).display_name
    }

    /// Display styling attached to this mnemonic, if any.
    #[inline]
    pub const fn style_tag(self) -> Option<StyleTag> {
        display(self).style_tag
    }

    /// Returns `true` for the catch-all variant.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display styling carried by some table entries.
///
/// Downstream viewers highlight these mnemonics; the decoder attaches no
/// further meaning to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Flag the mnemonic for attention (rendered red).
    Attention,
}

impl StyleTag {
    /// In-band marker prefixed to the display text in legacy output.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Attention => "?red?",
        }
    }
}

/// One row of the display table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MnemonicEntry {
    /// Variant this row describes.
    pub mnemonic: Mnemonic,
    /// Canonical upper-case name.
    pub display_name: &'static str,
    /// Optional styling attribute.
    pub style_tag: Option<StyleTag>,
    /// Spelling used by legacy output when it differs from `display_name`.
    pub legacy_spelling: Option<&'static str>,
}

impl MnemonicEntry {
    const fn plain(mnemonic: Mnemonic, display_name: &'static str) -> Self {
        Self {
            mnemonic,
            display_name,
            style_tag: None,
            legacy_spelling: None,
        }
    }

    const fn flagged(mnemonic: Mnemonic, display_name: &'static str) -> Self {
        Self {
            mnemonic,
            display_name,
            style_tag: Some(StyleTag::Attention),
            legacy_spelling: None,
        }
    }

    const fn legacy(self, spelling: &'static str) -> Self {
        Self {
            legacy_spelling: Some(spelling),
            ..self
        }
    }

    /// Reconstructs the legacy display text: style marker, then the legacy
    /// spelling (or the canonical name).
    ///
    /// `BEQ` renders as `?red?BEG`, `ADD` as `ADD`.
    pub fn legacy_text(&self) -> String {
        let marker = self.style_tag.map_or("", StyleTag::marker);
        let name = self.legacy_spelling.unwrap_or(self.display_name);
        format!("{marker}{name}")
    }
}

/// Display table, one row per [`Mnemonic`] in discriminant order.
static MNEMONIC_TABLE: [MnemonicEntry; Mnemonic::COUNT] = [
    MnemonicEntry::flagged(Mnemonic::Unknown, "UNKN"),
    MnemonicEntry::plain(Mnemonic::Lui, "LUI"),
    MnemonicEntry::plain(Mnemonic::Auipc, "AUIPC"),
    MnemonicEntry::plain(Mnemonic::Jal, "JAL"),
    MnemonicEntry::plain(Mnemonic::Jalr, "JALR"),
    MnemonicEntry::flagged(Mnemonic::Beq, "BEQ").legacy("BEG"),
    MnemonicEntry::flagged(Mnemonic::Bne, "BNE"),
    MnemonicEntry::flagged(Mnemonic::Blt, "BLT"),
    MnemonicEntry::flagged(Mnemonic::Bge, "BGE"),
    MnemonicEntry::flagged(Mnemonic::Bltu, "BLTU"),
    MnemonicEntry::flagged(Mnemonic::Bgeu, "BGEU"),
    MnemonicEntry::plain(Mnemonic::Addi, "ADDI"),
    MnemonicEntry::plain(Mnemonic::Lw, "LW"),
    MnemonicEntry::plain(Mnemonic::Lh, "LH"),
    MnemonicEntry::plain(Mnemonic::Lb, "LB"),
    MnemonicEntry::plain(Mnemonic::Lhu, "LHU"),
    MnemonicEntry::plain(Mnemonic::Lbu, "LBU"),
    MnemonicEntry::plain(Mnemonic::Sw, "SW"),
    MnemonicEntry::plain(Mnemonic::Sh, "SH"),
    MnemonicEntry::plain(Mnemonic::Sb, "SB"),
    MnemonicEntry::plain(Mnemonic::Slti, "SLTI"),
    MnemonicEntry::plain(Mnemonic::Sltiu, "SLTIU"),
    MnemonicEntry::plain(Mnemonic::Xori, "XORI"),
    MnemonicEntry::plain(Mnemonic::Ori, "ORI"),
    MnemonicEntry::plain(Mnemonic::Andi, "ANDI"),
    MnemonicEntry::plain(Mnemonic::Slli, "SLLI"),
    MnemonicEntry::plain(Mnemonic::Srli, "SRLI"),
    MnemonicEntry::plain(Mnemonic::Srai, "SRAI"),
    MnemonicEntry::plain(Mnemonic::Add, "ADD"),
    MnemonicEntry::plain(Mnemonic::Sub, "SUB"),
    MnemonicEntry::plain(Mnemonic::Sll, "SLL"),
    MnemonicEntry::plain(Mnemonic::Slt, "SLT"),
    MnemonicEntry::plain(Mnemonic::Sltu, "SLTU"),
    MnemonicEntry::plain(Mnemonic::Xor, "XOR"),
    MnemonicEntry::plain(Mnemonic::Srl, "SRL"),
    MnemonicEntry::plain(Mnemonic::Sra, "SRA"),
    MnemonicEntry::plain(Mnemonic::Or, "OR"),
    MnemonicEntry::plain(Mnemonic::And, "AND"),
];

/// Looks up the display row for a mnemonic.
///
/// # Arguments
///
/// * `mnemonic` - The decoded variant.
#[inline]
pub const fn display(mnemonic: Mnemonic) -> &'static MnemonicEntry {
    &MNEMONIC_TABLE[mnemonic.index()]
}

/// The whole display table in discriminant order.
pub const fn table() -> &'static [MnemonicEntry] {
    &MNEMONIC_TABLE
}
