//! RV32I instruction word disassembler CLI.
//!
//! Reads whitespace-delimited hexadecimal instruction words from standard input
//! and prints one mnemonic per line on standard output. It performs:
//! 1. **Configuration:** Defaults, then an optional JSON config file, then flags.
//! 2. **Logging:** `tracing` events to stderr, filtered by `RUST_LOG` (default `warn`).
//! 3. **Decoding:** Streams stdin through the decoder until end of input.
//!
//! Whatever stdin contains, the exit status is success; only command-line and
//! config-file problems fail the run.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use rv32i_decoder::config::{Config, NameStyle};
use rv32i_decoder::isa::Dialect;
use rv32i_decoder::stream;

#[derive(Parser, Debug)]
#[command(
    name = "disassm",
    author,
    version,
    about = "RV32I instruction word to mnemonic decoder",
    long_about = "Reads hex instruction words from stdin and prints one mnemonic per line.\n\nExamples:\n  echo 00000013 40005033 | disassm\n  disassm --dialect legacy --names legacy < trace.hex"
)]
struct Cli {
    /// JSON configuration file; flags given on the command line override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dispatch table variant.
    #[arg(long, value_enum)]
    dialect: Option<DialectArg>,

    /// How mnemonics are printed.
    #[arg(long, value_enum)]
    names: Option<NamesArg>,

    /// Flush only at end of input instead of after every line.
    #[arg(long)]
    no_flush: bool,

    /// Print a decode summary to stderr when input ends.
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DialectArg {
    /// ISA encoding (SRLI / SRAI).
    Standard,
    /// Historical table (shift-right immediates decode as ORI).
    Legacy,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Standard => Self::Standard,
            DialectArg::Legacy => Self::Legacy,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NamesArg {
    /// Canonical names (BEQ, UNKN).
    Canonical,
    /// Historical text with style markers (?red?BEG).
    Legacy,
}

impl From<NamesArg> for NameStyle {
    fn from(arg: NamesArg) -> Self {
        match arg {
            NamesArg::Canonical => Self::Canonical,
            NamesArg::Legacy => Self::Legacy,
        }
    }
}

/// Exit status when the configuration cannot be loaded.
const CONFIG_ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("disassm: {e}");
            return ExitCode::from(CONFIG_ERROR_EXIT);
        }
    };
    debug!(?config, "configuration resolved");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match stream::run(stdin, stdout, &config) {
        Ok(stats) => {
            info!(tokens = stats.tokens, unknown = stats.unknown(), "done");
            if cli.stats {
                eprint!("{stats}");
            }
        }
        Err(e) if e.is_broken_pipe() => debug!("output closed early: {e}"),
        Err(e) => error!("{e}"),
    }

    ExitCode::SUCCESS
}

/// Installs the stderr `tracing` subscriber.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Layers defaults, the optional config file, and command-line flags.
fn resolve_config(cli: &Cli) -> Result<Config, rv32i_decoder::common::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(dialect) = cli.dialect {
        config.decode.dialect = dialect.into();
    }
    if let Some(names) = cli.names {
        config.output.names = names.into();
    }
    if cli.no_flush {
        config.output.flush_each_line = false;
    }

    Ok(config)
}
