use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SNAPSHOT_FORMAT_VERSION;

/// Metadata written beside a snapshot's artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub format_version: u32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub item_count: usize,
    pub vocabulary_size: usize,
    pub max_features: usize,
    pub catalog_sha256: String,
    pub similarity_sha256: String,
}

impl Manifest {
    pub fn new(
        name: &str,
        item_count: usize,
        vocabulary_size: usize,
        max_features: usize,
        catalog_bytes: &[u8],
        similarity_bytes: &[u8],
    ) -> Self {
        Manifest {
            format_version: SNAPSHOT_FORMAT_VERSION,
            name: name.to_string(),
            created_at: Utc::now(),
            item_count,
            vocabulary_size,
            max_features,
            catalog_sha256: sha256_hex(catalog_bytes),
            similarity_sha256: sha256_hex(similarity_bytes),
        }
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_value() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_manifest_digests_artifacts() {
        let manifest = Manifest::new("000001-x", 2, 5, 5000, b"[]", b"SIMM");
        assert_eq!(manifest.format_version, SNAPSHOT_FORMAT_VERSION);
        assert_eq!(manifest.catalog_sha256, sha256_hex(b"[]"));
        assert_ne!(manifest.catalog_sha256, manifest.similarity_sha256);
    }
}
