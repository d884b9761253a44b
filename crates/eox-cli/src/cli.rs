//! CLI argument definitions for the EoX report tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "eox-report",
    version,
    about = "EoX Report - Enrich a serial-number CSV with Cisco lifecycle dates",
    long_about = "Look up End-of-Life/End-of-Support milestones for hardware serial\n\
                  numbers via the Cisco EoX API and write the input table back out\n\
                  with five lifecycle-date columns appended."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Build the lifecycle report for a serial-number CSV.
    Report(ReportArgs),

    /// List the date columns the report appends.
    Columns,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the CSV file containing hardware serial numbers.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Header of the column holding the serial numbers.
    #[arg(
        long = "serial-column",
        value_name = "NAME",
        default_value = "Serial Number"
    )]
    pub serial_column: String,

    /// Write the report here instead of next to the input.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// OAuth client ID of the Cisco API-console application.
    #[arg(long = "client-id", value_name = "ID", env = "EOX_CLIENT_ID")]
    pub client_id: String,

    /// OAuth client secret of the Cisco API-console application.
    #[arg(
        long = "client-secret",
        value_name = "SECRET",
        env = "EOX_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: String,
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
