//! CLI argument definitions for `tidy-csv`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tidy-csv",
    version,
    about = "Clean dirty CSV exports and report every correction",
    long_about = "Normalize messy CSV exports without a schema.\n\n\
                  Column names are canonicalized, null placeholders and stray whitespace \n\
                  removed, emails/phones/codes/names/tags/statuses normalized, and \n\
                  date-like and numeric-like columns re-typed. A JSON and a text report \n\
                  record every change."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Clean a CSV file and write the cleaned table plus reports.
    Clean(CleanArgs),

    /// Clean in memory and show canonical columns and a typed preview.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned CSV output (default: <INPUT stem>_clean.csv beside the input).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// JSON report path (default: clean_report.json next to the output).
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Text report path (default: clean_report.txt next to the output).
    #[arg(long = "report-text", value_name = "PATH")]
    pub report_text: Option<PathBuf>,

    /// Number of leading values sampled when detecting dates and numbers.
    #[arg(long = "sample-size", value_name = "N", default_value_t = 200)]
    pub sample_size: usize,

    /// Clean columns one after another instead of in parallel.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Keep exact duplicate rows.
    #[arg(long = "keep-duplicate-rows")]
    pub keep_duplicate_rows: bool,

    /// Clean and summarize without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of preview rows.
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
