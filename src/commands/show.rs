//! `simrec show`

use simrec_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, title: &str) -> Result<()> {
    let engine = ctx.open_engine()?;
    let item = engine.get_by_title(title)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        OutputFormat::Human => {
            println!("{}", item.title);
            println!("id: {}", item.id);
            println!("tags: {}", item.tags);
        }
    }
    Ok(())
}
