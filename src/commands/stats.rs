//! `simrec stats`

use simrec_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let engine = ctx.open_engine()?;
    let snapshot = engine.snapshot();

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = match &snapshot {
                Some(snapshot) => serde_json::json!({
                    "store": engine.root().display().to_string(),
                    "items": snapshot.model.size(),
                    "vocabulary_size": snapshot.model.vocabulary_size(),
                    "snapshot": snapshot.manifest.name,
                    "created_at": snapshot.manifest.created_at.to_rfc3339(),
                    "max_features": snapshot.manifest.max_features,
                }),
                None => serde_json::json!({
                    "store": engine.root().display().to_string(),
                    "items": 0,
                    "snapshot": null,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &snapshot {
            Some(snapshot) => {
                println!("Store: {}", engine.root().display());
                println!("Items: {}", snapshot.model.size());
                println!(
                    "Vocabulary: {} terms (max {})",
                    snapshot.model.vocabulary_size(),
                    snapshot.manifest.max_features
                );
                println!("Snapshot: {}", snapshot.manifest.name);
                println!(
                    "Created: {}",
                    snapshot.manifest.created_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
            None => {
                println!("Store: {}", engine.root().display());
                println!("No snapshot built yet");
            }
        },
    }
    Ok(())
}
