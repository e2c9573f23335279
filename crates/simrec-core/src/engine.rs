//! Consumer-facing engine
//!
//! Readers work on an immutable `Arc<Snapshot>`; a successful rebuild swaps
//! the reference, so queries never observe a half-built model and may keep
//! using an older snapshot they already hold. At most one rebuild runs per
//! engine (in-process mutex) and per store (lock file).

use std::path::Path;
use std::sync::{Arc, Mutex, RwLock, TryLockError};

use tracing::debug;

use crate::catalog::Item;
use crate::config::EngineConfig;
use crate::error::{Result, SimrecError};
use crate::pipeline::{RebuildPipeline, RebuildReport};
use crate::recommend::{self, Recommendation};
use crate::records::{self, ItemRecord};
use crate::snapshot::paths::CONFIG_FILE;
use crate::snapshot::{Snapshot, SnapshotStore};

pub struct Engine {
    store: SnapshotStore,
    config: EngineConfig,
    current: RwLock<Option<Arc<Snapshot>>>,
    writer: Mutex<()>,
}

impl Engine {
    /// Open the engine at `root`, reading `config.toml` and the live snapshot
    /// if they exist
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        let config = EngineConfig::load_or_default(&root.join(CONFIG_FILE))?;
        Self::with_config(root, config)
    }

    /// Open the engine at `root` with an explicit configuration
    pub fn with_config(root: &Path, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let store = SnapshotStore::new(root);
        let current = store.load_current()?.map(Arc::new);
        debug!(
            loaded = current.is_some(),
            items = current.as_ref().map(|s| s.model.size()).unwrap_or(0),
            "engine_open"
        );

        Ok(Engine {
            store,
            config,
            current: RwLock::new(current),
            writer: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        self.store.root()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The snapshot queries currently run against
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn require_snapshot(&self) -> Result<Arc<Snapshot>> {
        self.snapshot()
            .ok_or_else(|| SimrecError::empty_model("no snapshot has been built"))
    }

    fn swap(&self, snapshot: Option<Arc<Snapshot>>) {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = snapshot;
    }

    /// Top `k` items most similar to `title`
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        let snapshot = self.require_snapshot()?;
        recommend::recommend(&snapshot.model, title, k)
    }

    /// [`Engine::recommend`] with the configured default `k`
    pub fn recommend_default(&self, title: &str) -> Result<Vec<Recommendation>> {
        self.recommend(title, self.config.default_k)
    }

    pub fn get_by_title(&self, title: &str) -> Result<Item> {
        let snapshot = self.require_snapshot()?;
        snapshot.model.catalog().get_by_title(title).cloned()
    }

    /// Catalog size of the live snapshot; 0 when none exists
    pub fn size(&self) -> usize {
        self.snapshot().map(|s| s.model.size()).unwrap_or(0)
    }

    /// Items whose title contains `filter` (case-insensitive), in catalog order
    pub fn search_titles(&self, filter: Option<&str>, limit: Option<usize>) -> Result<Vec<Item>> {
        let snapshot = self.require_snapshot()?;
        let needle = filter.map(str::to_lowercase);
        let matches = snapshot
            .model
            .catalog()
            .items()
            .iter()
            .filter(|item| match &needle {
                Some(needle) => item.title.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matches)
    }

    /// Append `items` and rebuild the whole model, then swap it in
    pub fn ingest_and_rebuild(&self, items: Vec<Item>) -> Result<RebuildReport> {
        let _writer = match self.writer.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                return Err(SimrecError::RebuildInProgress {
                    lock_path: self.store.lock_path(),
                })
            }
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };

        let (report, snapshot) = RebuildPipeline::new(&self.store, &self.config).run(items)?;
        self.swap(Some(Arc::new(snapshot)));
        Ok(report)
    }

    /// Normalize import records and ingest them as one batch
    pub fn ingest_records(&self, records: Vec<ItemRecord>) -> Result<RebuildReport> {
        let items = records::into_items(records)?;
        self.ingest_and_rebuild(items)
    }

    /// Re-read the live snapshot from disk
    pub fn reload(&self) -> Result<()> {
        let current = self.store.load_current()?.map(Arc::new);
        self.swap(current);
        Ok(())
    }
}
