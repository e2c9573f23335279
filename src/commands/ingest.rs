//! `simrec ingest`, `simrec rebuild` and `simrec sample`

use std::path::Path;

use simrec_core::error::{Result, SimrecError};
use simrec_core::pipeline::RebuildReport;
use simrec_core::records::load_records;
use simrec_core::sample::sample_records;
use simrec_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn execute_ingest(ctx: &CommandContext, file: &Path) -> Result<()> {
    let records = load_records(file)?;
    let engine = ctx.open_engine()?;
    let report = engine.ingest_records(records)?;
    trace_time!(ctx.start, "ingest", added = report.added);
    output_report(ctx, &report)
}

pub fn execute_rebuild(ctx: &CommandContext) -> Result<()> {
    let engine = ctx.open_engine()?;
    let report = engine.ingest_and_rebuild(Vec::new())?;
    trace_time!(ctx.start, "rebuild", size = report.size);
    output_report(ctx, &report)
}

pub fn execute_sample(ctx: &CommandContext) -> Result<()> {
    let engine = ctx.open_engine()?;
    if engine.size() > 0 {
        return Err(SimrecError::UsageError(format!(
            "store already holds {} items; the sample catalog needs an empty store",
            engine.size()
        )));
    }
    let report = engine.ingest_records(sample_records())?;
    output_report(ctx, &report)
}

fn output_report(ctx: &CommandContext, report: &RebuildReport) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Human => {
            if ctx.cli.quiet {
                return Ok(());
            }
            println!(
                "Rebuilt model: {} items ({} added), {} vocabulary terms",
                report.size, report.added, report.vocabulary_size
            );
            println!("Snapshot: {}", report.snapshot);
            for title in &report.blank_items {
                println!("  warning: '{}' has no usable tags", title);
            }
        }
    }
    Ok(())
}
