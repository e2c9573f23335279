//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current snapshot format version
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Default vocabulary cap
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of vocabulary terms (feature columns)
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Number of recommendations returned when the caller gives no `k`
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Shortest token (in characters) kept by the tokenizer
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    /// Stop words added on top of the built-in English list
    #[serde(default)]
    pub extra_stop_words: Vec<String>,

    /// Number of published snapshots kept on disk (the live one included)
    #[serde(default = "default_retain_snapshots")]
    pub retain_snapshots: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
            default_k: default_k(),
            min_token_len: default_min_token_len(),
            extra_stop_words: Vec::new(),
            retain_snapshots: default_retain_snapshots(),
        }
    }
}

fn default_max_features() -> usize {
    DEFAULT_MAX_FEATURES
}

fn default_k() -> usize {
    5
}

fn default_min_token_len() -> usize {
    2
}

fn default_retain_snapshots() -> usize {
    2
}
