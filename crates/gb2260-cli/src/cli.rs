//! CLI argument definitions for the division query tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gb2260",
    version,
    about = "Query GB/T 2260 administrative division datasets",
    long_about = "Resolve six-digit GB/T 2260 administrative division codes against\n\
                  versioned datasets (gb, stats, mca, and the combined curated source)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the generated division data (manifest.json
    /// plus TSV revision files). Falls back to GB2260_DATA_DIR.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Dataset source to query.
    #[arg(long, value_name = "NAME", default_value = "curated", global = true)]
    pub source: String,

    /// Revision to query (default: the source's latest).
    #[arg(long, value_name = "NAME", global = true)]
    pub revision: Option<String>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a single code to its name.
    Lookup(CodeArgs),

    /// Print the space-joined ancestor names for a code.
    Describe(CodeArgs),

    /// List every province-level division in the revision.
    Provinces,

    /// List prefecture-level divisions under a province code.
    Prefectures(CodeArgs),

    /// List county-level divisions under a prefecture code.
    Counties(CodeArgs),

    /// List the revisions of the selected source, newest first.
    Revisions,

    /// List the registered dataset sources.
    Sources,
}

#[derive(Parser)]
pub struct CodeArgs {
    /// Six-digit division code.
    #[arg(value_name = "CODE")]
    pub code: String,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
