//! Decode statistics collection and reporting.
//!
//! Tracks what a streaming run saw. It provides:
//! 1. **Token quality:** Exact, partially parsed, and invalid token counts.
//! 2. **Instruction mix:** A per-mnemonic histogram indexed like the display table.

use std::fmt;

use crate::common::hex::HexToken;
use crate::isa::mnemonic::Mnemonic;

/// Counters accumulated over one decode run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeStats {
    /// Number of non-empty tokens read.
    pub tokens: u64,
    /// Tokens that were entirely valid hex.
    pub exact_tokens: u64,
    /// Tokens with trailing characters after a valid hex prefix.
    pub partial_tokens: u64,
    /// Tokens with no hex digit at all.
    pub invalid_tokens: u64,
    histogram: [u64; Mnemonic::COUNT],
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self {
            tokens: 0,
            exact_tokens: 0,
            partial_tokens: 0,
            invalid_tokens: 0,
            histogram: [0; Mnemonic::COUNT],
        }
    }
}

impl DecodeStats {
    /// Records one decoded token.
    ///
    /// # Arguments
    ///
    /// * `token` - How the token parsed.
    /// * `mnemonic` - What its word decoded to.
    pub const fn record(&mut self, token: HexToken, mnemonic: Mnemonic) {
        self.tokens += 1;
        match token {
            HexToken::Exact(_) => self.exact_tokens += 1,
            HexToken::Partial { .. } => self.partial_tokens += 1,
            HexToken::Invalid => self.invalid_tokens += 1,
        }
        self.histogram[mnemonic.index()] += 1;
    }

    /// Number of tokens that decoded to `mnemonic`.
    pub const fn count(&self, mnemonic: Mnemonic) -> u64 {
        self.histogram[mnemonic.index()]
    }

    /// Number of tokens that decoded to `Unknown`.
    pub const fn unknown(&self) -> u64 {
        self.count(Mnemonic::Unknown)
    }

    /// Non-zero histogram rows in table order.
    pub fn mix(&self) -> impl Iterator<Item = (Mnemonic, u64)> + '_ {
        Mnemonic::ALL
            .iter()
            .map(|&m| (m, self.count(m)))
            .filter(|&(_, n)| n > 0)
    }
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = if self.tokens == 0 { 1 } else { self.tokens };
        let pct = |n: u64| (n as f64 / total as f64) * 100.0;

        writeln!(f, "decode.tokens            {}", self.tokens)?;
        writeln!(f, "decode.exact             {}", self.exact_tokens)?;
        writeln!(
            f,
            "decode.partial           {} ({:.2}%)",
            self.partial_tokens,
            pct(self.partial_tokens)
        )?;
        writeln!(
            f,
            "decode.invalid           {} ({:.2}%)",
            self.invalid_tokens,
            pct(self.invalid_tokens)
        )?;
        writeln!(
            f,
            "decode.unknown           {} ({:.2}%)",
            self.unknown(),
            pct(self.unknown())
        )?;
        for (mnemonic, n) in self.mix() {
            writeln!(f, "  mix.{:<19} {n} ({:.2}%)", mnemonic.name(), pct(n))?;
        }
        Ok(())
    }
}
