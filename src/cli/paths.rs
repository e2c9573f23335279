//! Path resolution for the store directory

use std::env;
use std::path::{Path, PathBuf};

use simrec_core::snapshot::paths::DEFAULT_STORE_DIR;

/// Resolve the base directory: explicit `--root`, else the current directory
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve the store directory against `root`; defaults to `<root>/.simrec`
pub fn resolve_store_path(root: &Path, store: Option<&Path>) -> PathBuf {
    match store {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => root.join(DEFAULT_STORE_DIR),
    }
}
