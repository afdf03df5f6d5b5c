/// XFR command-line tool: transcode byte streams between character
/// encodings and pull files through the progress-tracked collector.
///
/// # Command overview
///
/// ```text
/// xfr <COMMAND> [OPTIONS]
///
/// Commands:
///   convert    Convert a file (or stdin) between two character encodings
///   label      Print the canonical form of encoding names
///   pull       Collect a file with a progress bar, optionally transcoding
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                   |
/// |------|-------------------------------------------|
/// | 0    | Success                                   |
/// | 1    | Error (I/O failure, unknown codec, etc.)  |
///
/// All diagnostics and the progress bar go to stderr so stdout can carry
/// raw payload bytes cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_convert;
mod cmd_label;
mod cmd_pull;
mod term_progress;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The XFR transcode-and-transfer command-line tool.
#[derive(Parser)]
#[command(name = "xfr", version, about = "Transcode and transfer toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Convert a file (or stdin) between two character encodings.
    Convert(ConvertArgs),
    /// Print the canonical form of one or more encoding names.
    Label(LabelArgs),
    /// Collect a file through the stream collector with a progress bar.
    Pull(PullArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `xfr convert`.
///
/// Reads the whole input, runs one transcode, writes the result. Both
/// encoding names accept any alias spelling (`latin1`, `win-1252`,
/// `utf8`, ...) and default to UTF-8 when omitted.
///
/// ```text
/// ┌──────────┬─────────────────────────────────────────────────┐
/// │ Flag     │ Effect                                          │
/// ├──────────┼─────────────────────────────────────────────────┤
/// │ --from   │ Source encoding name (default UTF-8)            │
/// │ --to     │ Target encoding name (default UTF-8)            │
/// │ -o PATH  │ Write to a file instead of stdout               │
/// └──────────┴─────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Input file. `-` or absent reads stdin.
    pub input: Option<PathBuf>,

    /// Source encoding name, any alias spelling.
    #[arg(long)]
    pub from: Option<String>,

    /// Target encoding name, any alias spelling.
    #[arg(long)]
    pub to: Option<String>,

    /// Write converted bytes to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `xfr label`.
///
/// Resolves each name through the alias rules and reports the canonical
/// form, plus whether the codec registry supports it. `--json` emits a
/// machine-readable report instead of one line per name.
#[derive(clap::Args)]
pub struct LabelArgs {
    /// Encoding names to canonicalize.
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `xfr pull`.
///
/// Streams a file through the async collector, painting a progress line
/// on stderr as chunks arrive, then writes the collected bytes out,
/// optionally transcoded first. The size estimate feeding the percentage
/// comes from file metadata unless `--size` overrides it.
///
/// ```text
/// ┌──────────┬─────────────────────────────────────────────────┐
/// │ Flag     │ Effect                                          │
/// ├──────────┼─────────────────────────────────────────────────┤
/// │ --size N │ Override the estimated byte count               │
/// │ --from   │ Transcode the collected bytes from this name    │
/// │ --to     │ Transcode the collected bytes to this name      │
/// │ -o PATH  │ Write to a file instead of stdout               │
/// │ -q       │ Suppress the progress bar                       │
/// └──────────┴─────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct PullArgs {
    /// File to collect.
    pub file: PathBuf,

    /// Override the estimated total size used for the percentage.
    #[arg(long)]
    pub size: Option<u64>,

    /// Transcode the collected bytes from this encoding.
    #[arg(long)]
    pub from: Option<String>,

    /// Transcode the collected bytes to this encoding.
    #[arg(long)]
    pub to: Option<String>,

    /// Write collected bytes to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the progress bar.
    #[arg(short, long)]
    pub quiet: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => cmd_convert::run(&args),
        Commands::Label(args) => cmd_label::run(&args),
        Commands::Pull(args) => cmd_pull::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
