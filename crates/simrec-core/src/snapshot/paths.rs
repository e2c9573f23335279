/// Default store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".simrec";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Pointer file naming the live snapshot
pub const CURRENT_FILE: &str = "CURRENT";

/// Exclusive writer lock, present only while a rebuild runs
pub const LOCK_FILE: &str = "rebuild.lock";

/// Directory holding every published snapshot
pub const SNAPSHOTS_DIR: &str = "snapshots";

/// Snapshot artifacts
pub const MANIFEST_FILE: &str = "manifest.json";
pub const CATALOG_FILE: &str = "catalog.json";
pub const SIMILARITY_FILE: &str = "similarity.bin";

/// Prefix of snapshot directories still being written
pub const STAGING_PREFIX: &str = ".staging-";
