//! CLI argument definitions for the template generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bugtrack",
    version,
    about = "Bug Tracking Template Studio - Generate a dropdown-driven bug tracker",
    long_about = "Generate an XLSX bug-tracking template with dropdown-constrained\n\
                  columns, a hidden reference sheet feeding the dropdowns, and an\n\
                  instructions sheet. The module catalog behind the dependent\n\
                  Tab/Section dropdown is configurable via a TOML file."
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
    /// Generate the bug-tracking template workbook.
    Generate(GenerateArgs),

    /// List the modules and sections behind the dropdowns.
    Modules(ModulesArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Destination path for the workbook.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "CRM_Bug_Tracking_Template.xlsx"
    )]
    pub output: PathBuf,

    /// TOML module catalog (default: the built-in CRM catalog).
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Template title, used on the instructions sheet.
    #[arg(
        long = "title",
        value_name = "TITLE",
        default_value = "CRM Bug Tracking Template"
    )]
    pub title: String,

    /// Number of data rows covered by the dropdown rules.
    #[arg(
        long = "rows",
        value_name = "N",
        default_value_t = 999,
        value_parser = clap::value_parser!(u32).range(1..=100_000)
    )]
    pub rows: u32,

    /// Skip the illustrative sample row.
    #[arg(long = "no-sample-row")]
    pub no_sample_row: bool,

    /// Skip the instructions sheet.
    #[arg(long = "no-instructions")]
    pub no_instructions: bool,

    /// Validate the catalog and report without writing the file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ModulesArgs {
    /// TOML module catalog (default: the built-in CRM catalog).
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
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
