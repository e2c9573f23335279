//! `simrec list`

use simrec_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, filter: Option<&str>, limit: Option<usize>) -> Result<()> {
    let engine = ctx.open_engine()?;
    let items = engine.search_titles(filter, limit)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = items
                .iter()
                .map(|item| {
                    serde_json::json!({
                        "id": item.id,
                        "title": item.title,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if items.is_empty() && !ctx.cli.quiet {
                println!("No items found");
            }
            for item in &items {
                println!("{} {}", item.id, item.title);
            }
        }
    }
    Ok(())
}
