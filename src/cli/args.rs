//! Per-command argument structs

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Item records: JSON array or JSON Lines, or CSV when the file ends in `.csv`
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Exact (case-sensitive) item title
    pub title: String,

    /// Number of recommendations (defaults to `default_k` from config)
    #[arg(long, short)]
    pub k: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Exact (case-sensitive) item title
    pub title: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive substring filter on titles
    #[arg(long, short)]
    pub filter: Option<String>,

    /// Maximum number of items to list
    #[arg(long, short)]
    pub limit: Option<usize>,
}
