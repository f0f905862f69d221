//! Hexadecimal token parsing.
//!
//! Tokens are read the way a C `%x` conversion reads them, but deterministically:
//!
//! 1. An optional `+` or `-` sign.
//! 2. An optional `0x` / `0X` prefix, taken only when a hex digit follows it.
//! 3. The longest run of hex digits. Every digit shifts the value left by four
//!    bits, so a run longer than eight digits keeps the low 32 bits.
//! 4. A `-` sign negates the result with two's-complement wrap.
//!
//! Anything after the digit run is ignored. A token with no digit at all is
//! [`HexToken::Invalid`] and stands for the word `0`.

/// Outcome of parsing one whitespace-delimited token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexToken {
    /// The whole token was a valid hex number.
    Exact(u32),
    /// A valid hex prefix followed by trailing characters.
    Partial {
        /// Value of the valid prefix.
        word: u32,
        /// Number of bytes of the token that were consumed.
        consumed: usize,
    },
    /// No hex digit could be read.
    Invalid,
}

impl HexToken {
    /// The instruction word this token stands for.
    ///
    /// Invalid tokens yield `0`, which decodes as `Unknown`.
    pub const fn word(self) -> u32 {
        match self {
            Self::Exact(word) | Self::Partial { word, .. } => word,
            Self::Invalid => 0,
        }
    }

    /// Returns `true` when the entire token was consumed.
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// Parses a single token as a hexadecimal instruction word.
///
/// Never fails; see the module docs for the exact rules.
///
/// # Arguments
///
/// * `token` - One token without surrounding whitespace.
///
/// # Examples
///
/// ```
/// use rv32i_decoder::common::hex::{HexToken, parse_hex_token};
///
/// assert_eq!(parse_hex_token("00000013"), HexToken::Exact(0x13));
/// assert_eq!(parse_hex_token("0x40005033"), HexToken::Exact(0x4000_5033));
/// assert_eq!(parse_hex_token("13zz"), HexToken::Partial { word: 0x13, consumed: 2 });
/// assert_eq!(parse_hex_token("zz"), HexToken::Invalid);
/// ```
pub fn parse_hex_token(token: &str) -> HexToken {
    let bytes = token.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if matches!(&bytes[pos..], [b'0', b'x' | b'X', next, ..] if next.is_ascii_hexdigit()) {
        pos += 2;
    }

    let digits_start = pos;
    let mut word: u32 = 0;
    while let Some(digit) = bytes.get(pos).and_then(|&b| hex_value(b)) {
        word = (word << 4) | digit;
        pos += 1;
    }

    if pos == digits_start {
        return HexToken::Invalid;
    }

    if negative {
        word = word.wrapping_neg();
    }

    if pos == bytes.len() {
        HexToken::Exact(word)
    } else {
        HexToken::Partial {
            word,
            consumed: pos,
        }
    }
}

/// Value of a single ASCII hex digit.
const fn hex_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'f' => Some((b - b'a' + 10) as u32),
        b'A'..=b'F' => Some((b - b'A' + 10) as u32),
        _ => None,
    }
}
