//! CLI argument parsing for simrec
//!
//! Supports global flags: --root, --store, --format, --quiet, --verbose

pub mod args;
pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{IngestArgs, ListArgs, RecommendArgs, ShowArgs};
pub use output::OutputFormat;
use output::parse_output_format;

/// Simrec - content similarity recommendations over an item catalog
#[derive(Parser, Debug)]
#[command(name = "simrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving a relative store path
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Store directory holding config and snapshots
    #[arg(long, global = true, env = "SIMREC_STORE")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, simrec_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add items from a JSON or JSON Lines file and rebuild the model
    Ingest(IngestArgs),

    /// Rebuild the model from the current catalog
    Rebuild,

    /// Ingest the built-in ten-movie demonstration catalog
    Sample,

    /// List the items most similar to a title
    Recommend(RecommendArgs),

    /// Show one catalog item
    Show(ShowArgs),

    /// Browse the catalog
    List(ListArgs),

    /// Show model and snapshot statistics
    Stats,
}
