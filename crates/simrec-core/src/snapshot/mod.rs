//! Persisted snapshots of the model
//!
//! A snapshot is a directory holding the catalog and similarity artifacts plus
//! a manifest. Snapshots are immutable once published. Publishing writes a
//! staging directory, renames it into place, then atomically replaces the
//! `CURRENT` pointer, so readers only ever see a complete snapshot and a
//! failed rebuild leaves the previous one live.
//!
//! ```text
//! .simrec/
//!   config.toml
//!   CURRENT
//!   rebuild.lock
//!   snapshots/<name>/{manifest.json, catalog.json, similarity.bin}
//! ```

mod codec;
mod lock;
mod manifest;
pub mod paths;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::bail_corrupt;
use crate::catalog::{Catalog, Item};
use crate::config::SNAPSHOT_FORMAT_VERSION;
use crate::error::{Result, SimrecError};
use crate::model::Model;
use crate::trace_time;

pub use codec::{decode_matrix, encode_matrix};
pub use lock::RebuildLock;
pub use manifest::{sha256_hex, Manifest};
use paths::{
    CATALOG_FILE, CURRENT_FILE, LOCK_FILE, MANIFEST_FILE, SIMILARITY_FILE, SNAPSHOTS_DIR,
    STAGING_PREFIX,
};

/// A loaded snapshot
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub manifest: Manifest,
    pub model: Model,
}

/// Snapshot storage rooted at a store directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SnapshotStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn snapshots_dir(&self) -> PathBuf {
        self.root.join(SNAPSHOTS_DIR)
    }

    fn current_path(&self) -> PathBuf {
        self.root.join(CURRENT_FILE)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(LOCK_FILE)
    }

    /// Take the exclusive writer lock, creating the store directory if needed
    pub fn lock(&self) -> Result<RebuildLock> {
        fs::create_dir_all(&self.root)
            .map_err(|e| SimrecError::io_operation("create", self.root.display(), e))?;
        RebuildLock::acquire(&self.lock_path())
    }

    /// Name of the live snapshot, if one was ever published
    pub fn current_name(&self) -> Result<Option<String>> {
        let path = self.current_path();
        if !path.exists() {
            return Ok(None);
        }
        let name = fs::read_to_string(&path)?.trim().to_string();
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(SimrecError::corrupt(path, "CURRENT does not name a snapshot"));
        }
        Ok(Some(name))
    }

    /// Load the live snapshot; `None` when nothing has been published yet
    pub fn load_current(&self) -> Result<Option<Snapshot>> {
        match self.current_name()? {
            Some(name) => self.load(&name).map(Some),
            None => Ok(None),
        }
    }

    /// Load and verify a snapshot by name
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load(&self, name: &str) -> Result<Snapshot> {
        let start = Instant::now();
        let dir = self.snapshots_dir().join(name);
        if !dir.is_dir() {
            bail_corrupt!(&dir, "snapshot directory is missing");
        }

        let manifest_bytes = read_artifact(&dir, MANIFEST_FILE)?;
        let manifest: Manifest = serde_json::from_slice(&manifest_bytes)
            .map_err(|e| SimrecError::corrupt(&dir, format!("unreadable manifest: {}", e)))?;
        if manifest.format_version != SNAPSHOT_FORMAT_VERSION {
            bail_corrupt!(
                &dir,
                format!("unsupported format version {}", manifest.format_version)
            );
        }

        let catalog_bytes = read_artifact(&dir, CATALOG_FILE)?;
        let similarity_bytes = read_artifact(&dir, SIMILARITY_FILE)?;

        if sha256_hex(&catalog_bytes) != manifest.catalog_sha256 {
            bail_corrupt!(&dir, "catalog checksum mismatch");
        }
        if sha256_hex(&similarity_bytes) != manifest.similarity_sha256 {
            bail_corrupt!(&dir, "similarity checksum mismatch");
        }

        let items: Vec<Item> = serde_json::from_slice(&catalog_bytes)
            .map_err(|e| SimrecError::corrupt(&dir, format!("unreadable catalog: {}", e)))?;
        let catalog = Catalog::from_items(items)
            .map_err(|e| SimrecError::corrupt(&dir, format!("invalid catalog: {}", e)))?;
        let similarity =
            decode_matrix(&similarity_bytes).map_err(|reason| SimrecError::corrupt(&dir, reason))?;

        if catalog.size() != similarity.dim() || catalog.size() != manifest.item_count {
            return Err(SimrecError::corrupt(
                &dir,
                format!(
                    "size mismatch: catalog has {} items, similarity is {}x{}, manifest says {}",
                    catalog.size(),
                    similarity.dim(),
                    similarity.dim(),
                    manifest.item_count
                ),
            ));
        }

        let model = Model::new(catalog, similarity, manifest.vocabulary_size)
            .map_err(|e| SimrecError::corrupt(&dir, e.to_string()))?;

        trace_time!(start, "load_snapshot", items = model.size());
        Ok(Snapshot { manifest, model })
    }

    /// Write `model` as a new snapshot and make it the live one
    ///
    /// Callers must hold the [`RebuildLock`].
    #[tracing::instrument(skip(self, model, _lock), fields(root = %self.root.display(), items = model.size()))]
    pub fn publish(&self, model: &Model, max_features: usize, _lock: &RebuildLock) -> Result<Manifest> {
        let start = Instant::now();
        let snapshots_dir = self.snapshots_dir();
        fs::create_dir_all(&snapshots_dir)
            .map_err(|e| SimrecError::io_operation("create", snapshots_dir.display(), e))?;

        let name = self.next_name()?;
        let staging = snapshots_dir.join(format!("{}{}", STAGING_PREFIX, name));
        let final_dir = snapshots_dir.join(&name);
        fs::create_dir_all(&staging)?;

        let written = self.write_artifacts(&staging, &name, model, max_features);
        let manifest = match written {
            Ok(manifest) => manifest,
            Err(e) => {
                let _ = fs::remove_dir_all(&staging);
                return Err(e);
            }
        };

        fs::rename(&staging, &final_dir)
            .map_err(|e| SimrecError::io_operation("publish", final_dir.display(), e))?;
        if let Err(e) = self.write_current(&name) {
            // a snapshot CURRENT never named must not outlive the failed publish
            let _ = fs::remove_dir_all(&final_dir);
            return Err(e);
        }

        trace_time!(start, "publish_snapshot", items = model.size());
        info!(snapshot = %name, items = model.size(), "snapshot published");
        Ok(manifest)
    }

    fn write_artifacts(
        &self,
        dir: &Path,
        name: &str,
        model: &Model,
        max_features: usize,
    ) -> Result<Manifest> {
        let catalog_bytes = serde_json::to_vec_pretty(model.catalog().items())?;
        let similarity_bytes = encode_matrix(model.similarity());
        let manifest = Manifest::new(
            name,
            model.size(),
            model.vocabulary_size(),
            max_features,
            &catalog_bytes,
            &similarity_bytes,
        );

        write_synced(&dir.join(CATALOG_FILE), &catalog_bytes)?;
        write_synced(&dir.join(SIMILARITY_FILE), &similarity_bytes)?;
        write_synced(&dir.join(MANIFEST_FILE), &serde_json::to_vec_pretty(&manifest)?)?;
        Ok(manifest)
    }

    /// Swap the `CURRENT` pointer via write-then-rename
    fn write_current(&self, name: &str) -> Result<()> {
        let current = self.current_path();
        let temp = self.root.join(format!("{}.tmp", CURRENT_FILE));
        write_synced(&temp, format!("{}\n", name).as_bytes())?;
        if let Err(e) = fs::rename(&temp, &current) {
            let _ = fs::remove_file(&temp);
            return Err(SimrecError::io_operation("replace", current.display(), e));
        }
        Ok(())
    }

    /// Published snapshot names, oldest first
    pub fn list(&self) -> Result<Vec<String>> {
        let dir = self.snapshots_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if entry.path().is_dir() && !name.starts_with('.') {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// `<seq>-<timestamp>`, with `seq` one past the highest published
    fn next_name(&self) -> Result<String> {
        let seq = self
            .list()?
            .iter()
            .filter_map(|name| name.split('-').next()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Ok(format!(
            "{:06}-{}",
            seq,
            Utc::now().format("%Y%m%dT%H%M%S%3fZ")
        ))
    }

    /// Remove all but the newest `retain` snapshots, never the live one
    ///
    /// Snapshots newer than the live one were never published through
    /// `CURRENT`; they do not count toward `retain` and are removed. Also
    /// clears staging directories left by interrupted rebuilds. Failures are
    /// logged and skipped. Callers must hold the [`RebuildLock`].
    pub fn prune(&self, retain: usize, _lock: &RebuildLock) -> Vec<String> {
        let current = self.current_name().ok().flatten();
        let names = match self.list() {
            Ok(names) => names,
            Err(e) => {
                warn!(error = %e, "failed to list snapshots for pruning");
                return Vec::new();
            }
        };

        let (published, orphans): (Vec<String>, Vec<String>) = match &current {
            Some(current) => names.into_iter().partition(|name| name <= current),
            None => (names, Vec::new()),
        };

        let keep_from = published.len().saturating_sub(retain);
        let mut removed = Vec::new();
        for name in published[..keep_from].iter().chain(&orphans) {
            if current.as_deref() == Some(name.as_str()) {
                continue;
            }
            let path = self.snapshots_dir().join(name);
            match fs::remove_dir_all(&path) {
                Ok(()) => removed.push(name.clone()),
                Err(e) => warn!(path = %path.display(), error = %e, "failed to prune snapshot"),
            }
        }

        self.clear_staging();
        if !removed.is_empty() {
            debug!(removed = removed.len(), "pruned old snapshots");
        }
        removed
    }

    fn clear_staging(&self) {
        let Ok(entries) = fs::read_dir(self.snapshots_dir()) else {
            return;
        };
        for entry in entries.flatten() {
            if entry.file_name().to_string_lossy().starts_with(STAGING_PREFIX) {
                if let Err(e) = fs::remove_dir_all(entry.path()) {
                    warn!(path = %entry.path().display(), error = %e, "failed to clear staging directory");
                }
            }
        }
    }
}

fn read_artifact(dir: &Path, file: &str) -> Result<Vec<u8>> {
    let path = dir.join(file);
    fs::read(&path).map_err(|e| SimrecError::corrupt(&path, format!("unreadable artifact: {}", e)))
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| SimrecError::io_operation("create", path.display(), e))?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
