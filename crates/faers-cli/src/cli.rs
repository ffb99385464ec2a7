//! CLI argument definitions for the FAERS curation pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "faers-curator",
    version,
    about = "FAERS adverse-event curation pipeline",
    long_about = "Fetch adverse-event reports from openFDA FAERS and curate them\n\
                  into deliverable CSV tables with RxNorm drug-name enrichment,\n\
                  a QA summary, and a checksummed manifest."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch raw FAERS reports from openFDA into a JSON array file.
    Acquire(AcquireArgs),

    /// Curate a raw JSON array file into deliverable CSV tables.
    Process(ProcessArgs),
}

#[derive(Parser)]
pub struct AcquireArgs {
    /// Start of the receivedate window, YYYY-MM-DD.
    #[arg(long = "from", value_name = "DATE")]
    pub from_date: String,

    /// End of the receivedate window, YYYY-MM-DD.
    #[arg(long = "to", value_name = "DATE")]
    pub to_date: String,

    /// Occurrence country filter.
    #[arg(long, default_value = "US")]
    pub country: String,

    /// Comma-separated generic drug names to match.
    #[arg(long, default_value = "semaglutide,tirzepatide")]
    pub drugs: String,

    /// Comma-separated brand names to match.
    #[arg(long, default_value = "Ozempic,Mounjaro")]
    pub brands: String,

    /// Output directory for the raw file and fetch manifest.
    #[arg(long = "out", value_name = "DIR", default_value = "artifacts/raw_faers")]
    pub out_dir: PathBuf,

    /// Reuse an existing run id instead of generating one.
    #[arg(long = "run-id", value_name = "ID")]
    pub run_id: Option<String>,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the raw JSON array file.
    #[arg(long = "raw-file", value_name = "PATH")]
    pub raw_file: PathBuf,

    /// Output directory for deliverables.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "deliverables")]
    pub out_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
