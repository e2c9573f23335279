//! Ingestion and full rebuild
//!
//! `Idle → Loading → Validating → Rebuilding → Persisting → Idle`. Any failure
//! returns straight to `Idle` with the error; nothing on disk changes until the
//! new snapshot is complete, so the previous snapshot stays live.

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Item};
use crate::config::EngineConfig;
use crate::error::{Result, SimrecError};
use crate::model::Model;
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::trace_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Loading,
    Validating,
    Rebuilding,
    Persisting,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Idle => "idle",
            PipelineState::Loading => "loading",
            PipelineState::Validating => "validating",
            PipelineState::Rebuilding => "rebuilding",
            PipelineState::Persisting => "persisting",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a successful rebuild
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RebuildReport {
    pub snapshot: String,
    pub previous_size: usize,
    pub added: usize,
    pub size: usize,
    pub vocabulary_size: usize,
    /// Titles of new items whose tags produced no tokens
    pub blank_items: Vec<String>,
    /// Snapshots removed by retention
    pub pruned: Vec<String>,
}

/// One execution of the ingest-and-rebuild pipeline
pub struct RebuildPipeline<'a> {
    store: &'a SnapshotStore,
    config: &'a EngineConfig,
    state: PipelineState,
}

impl<'a> RebuildPipeline<'a> {
    pub fn new(store: &'a SnapshotStore, config: &'a EngineConfig) -> Self {
        RebuildPipeline {
            store,
            config,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn transition(&mut self, next: PipelineState) {
        debug!(from = %self.state, to = %next, "pipeline state");
        self.state = next;
    }

    /// Append `new_items` to the current catalog, rebuild everything and
    /// publish the result as the new live snapshot
    #[tracing::instrument(skip(self, new_items), fields(new_items = new_items.len()))]
    pub fn run(&mut self, new_items: Vec<Item>) -> Result<(RebuildReport, Snapshot)> {
        let result = self.execute(new_items);
        if let Err(e) = &result {
            warn!(state = %self.state, error = %e, "rebuild failed");
        }
        self.transition(PipelineState::Idle);
        result
    }

    fn execute(&mut self, new_items: Vec<Item>) -> Result<(RebuildReport, Snapshot)> {
        let start = Instant::now();
        let lock = self.store.lock()?;

        self.transition(PipelineState::Loading);
        let previous = self.store.load_current()?;
        if previous.is_none() && new_items.is_empty() {
            return Err(SimrecError::empty_model(
                "no snapshot to rebuild from and no new items",
            ));
        }
        let mut catalog = previous
            .map(|snapshot| snapshot.model.catalog().clone())
            .unwrap_or_else(Catalog::new);
        let previous_size = catalog.size();
        trace_time!(start, "pipeline_load", items = previous_size);

        self.transition(PipelineState::Validating);
        let tokenizer = self.config.tokenizer();
        let blank_items: Vec<String> = new_items
            .iter()
            .filter(|item| tokenizer.is_blank(&item.tags))
            .map(|item| item.title.clone())
            .collect();
        for title in &blank_items {
            warn!(title = %title, "item has no usable tags; it will match nothing");
        }
        let added = new_items.len();
        catalog.append(new_items)?;
        if catalog.is_empty() {
            return Err(SimrecError::empty_model("catalog is empty"));
        }

        self.transition(PipelineState::Rebuilding);
        let model = Model::build(catalog, self.config);
        trace_time!(start, "pipeline_rebuild", items = model.size());

        self.transition(PipelineState::Persisting);
        let manifest = self.store.publish(&model, self.config.max_features, &lock)?;
        let pruned = self.store.prune(self.config.retain_snapshots, &lock);

        let report = RebuildReport {
            snapshot: manifest.name.clone(),
            previous_size,
            added,
            size: model.size(),
            vocabulary_size: model.vocabulary_size(),
            blank_items,
            pruned,
        };
        info!(
            snapshot = %report.snapshot,
            added = report.added,
            size = report.size,
            "rebuild complete"
        );
        trace_time!(start, "pipeline_total");

        Ok((report, Snapshot { manifest, model }))
    }
}
