/// Property store command-line tool: inspect, validate and list the
/// contents of serialized property store files.
///
/// # Command overview
///
/// ```text
/// sps <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print every set and record of a store
///   validate   Check a store for structural correctness
///   list       Print one line per record
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log decoder progress to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                  |
/// |------|------------------------------------------|
/// | 0    | Success                                  |
/// | 1    | Error (I/O failure, invalid store, etc.) |
///
/// All error details and log output go to stderr so stdout can be piped
/// cleanly.
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sps_decoder::{DEFAULT_MAX_VALUE_SIZE, DecoderConfig, StoreDecoder};
use sps_types::{Codepage, Store};
use tracing_subscriber::EnvFilter;

mod cmd_inspect;
mod cmd_list;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Serialized property store tool.
#[derive(Parser)]
#[command(name = "sps", version, about = "Serialized property store CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder progress (debug level) to stderr. `RUST_LOG` overrides.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print every set and record of a store.
    Inspect(InspectArgs),
    /// Check a store for structural correctness.
    Validate(ValidateArgs),
    /// Print one tab-separated line per record.
    List(ListArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Decoder options shared by every command.
#[derive(clap::Args)]
pub struct DecodeOpts {
    /// Codepage for 8-bit strings: 1252 (Windows-1252) or 65001 (UTF-8).
    #[arg(long, default_value = "1252", value_parser = parse_codepage)]
    pub codepage: Codepage,

    /// Reject record payloads larger than this many bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE_SIZE)]
    pub max_value_size: usize,
}

impl DecodeOpts {
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig {
            codepage: self.codepage,
            max_value_size: self.max_value_size,
        }
    }

    /// Read `path` and decode it as a property store.
    pub fn decode_file(&self, path: &Path) -> Result<Store> {
        let bytes = read_file(path)?;
        StoreDecoder::new(self.decoder_config())
            .decode(&bytes)
            .with_context(|| format!("cannot decode {}", path.display()))
    }
}

/// Arguments for `sps inspect`.
///
/// ```text
/// ┌─────────────┬──────────────────────────────────────────────────┐
/// │ Flag        │ Effect                                           │
/// ├─────────────┼──────────────────────────────────────────────────┤
/// │ --json      │ Emit a JSON document instead of the text listing │
/// │ --set N     │ Show only the set at index N                     │
/// │ --show-hex  │ Include each record's raw payload as hex         │
/// └─────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the property store file.
    pub file: PathBuf,

    #[arg(long)]
    pub json: bool,

    /// Inspect only the set at this zero-based index.
    #[arg(long)]
    pub set: Option<usize>,

    #[arg(long)]
    pub show_hex: bool,

    #[command(flatten)]
    pub decode: DecodeOpts,
}

/// Arguments for `sps validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the property store file.
    pub file: PathBuf,

    #[command(flatten)]
    pub decode: DecodeOpts,
}

/// Arguments for `sps list`.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the property store file.
    pub file: PathBuf,

    #[command(flatten)]
    pub decode: DecodeOpts,
}

fn parse_codepage(s: &str) -> Result<Codepage, String> {
    let id: u32 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a codepage number"))?;
    Codepage::from_id(id).ok_or_else(|| format!("unsupported codepage {id} (expected 1252 or 65001)"))
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::List(args) => cmd_list::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
