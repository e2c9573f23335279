//! Cross-process single-writer lock for rebuilds

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{Result, SimrecError};

/// Held for the duration of a rebuild; the lock file is removed on drop
///
/// The file is created with `create_new`, so a second writer fails instead of
/// waiting. A lock left behind by a crashed process must be removed by hand.
#[derive(Debug)]
pub struct RebuildLock {
    path: PathBuf,
}

impl RebuildLock {
    pub fn acquire(path: &Path) -> Result<Self> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(SimrecError::RebuildInProgress {
                    lock_path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(SimrecError::io_operation("create", path.display(), e)),
        };

        writeln!(file, "pid={}", std::process::id())?;
        writeln!(file, "acquired={}", Utc::now().to_rfc3339())?;
        debug!(path = %path.display(), "rebuild lock acquired");

        Ok(RebuildLock {
            path: path.to_path_buf(),
        })
    }
}

impl Drop for RebuildLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to release rebuild lock");
        }
    }
}
