//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use shika_domain::ObjectCategory;
use std::path::PathBuf;

/// Shika CLI - Extract collision incidents from railway bulletins.
#[derive(Debug, Parser)]
#[command(name = "shika")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SHIKA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one tooltip line per location)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract incident records from a bulletin file
    Extract(ExtractArgs),

    /// Summarize the incidents in a bulletin file
    Summary(SummaryArgs),

    /// Run a single bulletin text through the extractor
    Check(CheckArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Bulletin JSON file, or '-' for stdin
    pub input: PathBuf,

    /// Also print skipped segments and rejected bulletins
    #[arg(short, long)]
    pub diagnostics: bool,

    /// Only keep records on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Only keep records on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Only keep records in these categories (comma separated, e.g. deer,bear)
    #[arg(long, value_delimiter = ',')]
    pub category: Vec<ObjectCategory>,
}

/// Arguments for the summary command.
#[derive(Debug, Parser)]
pub struct SummaryArgs {
    /// Bulletin JSON file, or '-' for stdin
    pub input: PathBuf,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Bulletin text
    pub text: String,

    /// Bulletin timestamp (defaults to now, local time)
    #[arg(short, long)]
    pub timestamp: Option<String>,
}
