//! Command implementations for all simrec commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{ingest, list, recommend, show, stats};
use simrec_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Ingest(args) => ingest::execute_ingest(ctx, &args.file),
            Commands::Rebuild => ingest::execute_rebuild(ctx),
            Commands::Sample => ingest::execute_sample(ctx),
            Commands::Recommend(args) => recommend::execute(ctx, &args.title, args.k),
            Commands::Show(args) => show::execute(ctx, &args.title),
            Commands::List(args) => list::execute(ctx, args.filter.as_deref(), args.limit),
            Commands::Stats => stats::execute(ctx),
        }
    }
}
