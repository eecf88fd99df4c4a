//! CLI argument definitions for the content template checker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "share-checker",
    version,
    about = "Check SHARE content templates for consistency",
    long_about = "Check SHARE/BRIDG content template workbooks for consistency.\n\n\
                  Validates sheet structure, per-row column rules and the agreement\n\
                  between concept tabs and the generic tab."
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
    /// Check template workbooks or folders of templates.
    Check(CheckArgs),

    /// List the registered rules in the order they run.
    Rules(ConfigArgs),

    /// List the terms of a terminology workbook and their C-Codes.
    Terms(TermsArgs),
}

#[derive(Args)]
pub struct TermsArgs {
    /// Terminology workbook (`Field` column plus `Code` and/or `Context`).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Only show terms without an assigned C-Code.
    #[arg(long = "uncoded")]
    pub uncoded: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Checker configuration file (default: <standards>/content_template.toml).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Template workbooks, or folders containing `*Template.xlsx` files.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// How findings are printed to stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Also write a dated report file into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Format of the report file written to --output-dir.
    #[arg(long = "report-format", value_enum, default_value = "csv")]
    pub report_format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Json,
    Csv,
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
