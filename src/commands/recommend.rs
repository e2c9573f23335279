//! `simrec recommend`

use simrec_core::error::Result;
use simrec_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, title: &str, k: Option<usize>) -> Result<()> {
    let engine = ctx.open_engine()?;
    let recommendations = match k {
        Some(k) => engine.recommend(title, k)?,
        None => engine.recommend_default(title)?,
    };
    let k = k.unwrap_or(engine.config().default_k);
    trace_time!(ctx.start, "recommend", results = recommendations.len());

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": title,
                "k": k,
                "results": recommendations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if recommendations.is_empty() {
                if !ctx.cli.quiet {
                    println!("No other items to compare with '{}'", title);
                }
                return Ok(());
            }
            for (rank, rec) in recommendations.iter().enumerate() {
                println!("{:>2}. {:.4}  {}", rank + 1, rec.score, rec.title);
            }
        }
    }
    Ok(())
}
