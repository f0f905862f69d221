//! Streaming decode adapter.
//!
//! Reads whitespace-delimited hex tokens from any [`BufRead`], decodes each one,
//! and writes one mnemonic per line to any [`Write`]. It performs:
//! 1. **Tokenizing:** Splits input on ASCII whitespace and vertical tab.
//! 2. **Parsing:** Converts each token with [`parse_hex_token`]; malformed tokens
//!    are decoded best-effort and logged, never rejected.
//! 3. **Output:** Renders the mnemonic by the configured [`NameStyle`] and
//!    flushes after each line unless told otherwise.
//!
//! The decoder core stays I/O free; this module is its only stream front end.

use std::borrow::Cow;
use std::io::{BufRead, ErrorKind, Write};

use tracing::{debug, trace, warn};

use crate::common::error::StreamError;
use crate::common::hex::{HexToken, parse_hex_token};
use crate::config::{Config, NameStyle};
use crate::isa::decode::{Dialect, decode_with};
use crate::isa::mnemonic::{Mnemonic, display};
use crate::stats::DecodeStats;

/// Parses and decodes a single token.
///
/// # Arguments
///
/// * `token` - One token without surrounding whitespace.
/// * `dialect` - Dispatch table variant.
///
/// # Returns
///
/// The parse outcome together with the decoded mnemonic.
pub fn decode_token(token: &str, dialect: Dialect) -> (HexToken, Mnemonic) {
    let parsed = parse_hex_token(token);
    (parsed, decode_with(parsed.word(), dialect))
}

/// Renders a mnemonic for output.
///
/// # Arguments
///
/// * `mnemonic` - The decoded variant.
/// * `names` - Canonical names or the legacy marked-up text.
pub fn render(mnemonic: Mnemonic, names: NameStyle) -> Cow<'static, str> {
    let entry = display(mnemonic);
    match names {
        NameStyle::Canonical => Cow::Borrowed(entry.display_name),
        NameStyle::Legacy => Cow::Owned(entry.legacy_text()),
    }
}

/// Returns `true` for bytes that separate tokens.
///
/// ASCII whitespace plus vertical tab, which `u8::is_ascii_whitespace` omits.
#[inline]
const fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}

/// Per-token output state for one run.
struct Emitter<W> {
    writer: W,
    dialect: Dialect,
    names: NameStyle,
    flush_each_line: bool,
    stats: DecodeStats,
}

impl<W: Write> Emitter<W> {
    fn emit(&mut self, raw: &[u8], line_no: u64) -> Result<(), StreamError> {
        let token = String::from_utf8_lossy(raw);
        let (parsed, mnemonic) = decode_token(&token, self.dialect);

        match parsed {
            HexToken::Exact(word) => {
                trace!(line = line_no, word = format_args!("{word:#010x}"), %mnemonic, "decoded");
            }
            HexToken::Partial { word, consumed } => {
                warn!(
                    line = line_no,
                    token = %token,
                    consumed,
                    word = format_args!("{word:#010x}"),
                    "trailing characters after hex word ignored"
                );
            }
            HexToken::Invalid => {
                warn!(line = line_no, token = %token, "token is not hexadecimal; decoding as 0");
            }
        }

        self.stats.record(parsed, mnemonic);

        writeln!(self.writer, "{}", render(mnemonic, self.names)).map_err(StreamError::Write)?;
        if self.flush_each_line {
            self.writer.flush().map_err(StreamError::Write)?;
        }
        Ok(())
    }
}

/// Decodes every token of `reader` and writes one line per token to `writer`.
///
/// Runs until end of input. Empty lines and runs of whitespace produce no
/// output. Input is consumed a buffer at a time, so each token is written as
/// soon as the separator after it arrives; only the token in progress is held
/// in memory.
///
/// # Arguments
///
/// * `reader` - Source of whitespace-delimited hex tokens.
/// * `writer` - Destination for the mnemonic lines.
/// * `config` - Dialect, name style, and flush policy.
///
/// # Errors
///
/// Returns [`StreamError::Read`] or [`StreamError::Write`] on I/O failure.
/// Malformed tokens are never an error.
pub fn run<R: BufRead, W: Write>(
    mut reader: R,
    writer: W,
    config: &Config,
) -> Result<DecodeStats, StreamError> {
    let mut out = Emitter {
        writer,
        dialect: config.decode.dialect,
        names: config.output.names,
        flush_each_line: config.output.flush_each_line,
        stats: DecodeStats::default(),
    };
    let mut token = Vec::new();
    let mut line_no: u64 = 1;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(StreamError::Read(e)),
        };
        if buf.is_empty() {
            break;
        }
        let len = buf.len();

        for &b in buf {
            if is_separator(b) {
                if !token.is_empty() {
                    out.emit(&token, line_no)?;
                    token.clear();
                }
                if b == b'\n' {
                    line_no += 1;
                }
            } else {
                token.push(b);
            }
        }
        reader.consume(len);
    }

    if !token.is_empty() {
        out.emit(&token, line_no)?;
    }

    out.writer.flush().map_err(StreamError::Write)?;
    let stats = out.stats;
    debug!(
        tokens = stats.tokens,
        partial = stats.partial_tokens,
        invalid = stats.invalid_tokens,
        unknown = stats.unknown(),
        "instruction stream finished"
    );
    Ok(stats)
}
