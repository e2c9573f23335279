//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use simrec_core::error::Result;
use simrec_core::Engine;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn store_path(&self) -> PathBuf {
        resolve_store_path(self.root, self.cli.store.as_deref())
    }

    /// Open the engine over the resolved store, loading its live snapshot
    pub fn open_engine(&self) -> Result<Engine> {
        let engine = Engine::open(&self.store_path())?;
        debug!(elapsed = ?self.start.elapsed(), items = engine.size(), "open_engine");
        Ok(engine)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("simrec {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Content similarity recommendations over an item catalog.");
        println!();
        println!("Run `simrec --help` for usage information.");
        Ok(())
    }
}
