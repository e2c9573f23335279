//! Engine configuration for simrec
//!
//! Configuration is stored in `<store>/config.toml`. Every field is optional;
//! a missing file means defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;
use crate::text::Tokenizer;

pub use types::{EngineConfig, DEFAULT_MAX_FEATURES, SNAPSHOT_FORMAT_VERSION};

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values that would make the engine meaningless
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            bail_invalid!("max_features", "0 (must be at least 1)");
        }
        if self.default_k == 0 {
            bail_invalid!("default_k", "0 (must be at least 1)");
        }
        if self.min_token_len == 0 {
            bail_invalid!("min_token_len", "0 (must be at least 1)");
        }
        if self.retain_snapshots == 0 {
            bail_invalid!("retain_snapshots", "0 (must be at least 1)");
        }
        Ok(())
    }

    /// Tokenizer configured with this engine's stop words and token length
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.min_token_len, &self.extra_stop_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimrecError;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_features, 5000);
        assert_eq!(config.default_k, 5);
        assert_eq!(config.min_token_len, 2);
        assert!(config.extra_stop_words.is_empty());
        assert_eq!(config.retain_snapshots, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = EngineConfig {
            max_features: 100,
            extra_stop_words: vec!["film".to_string()],
            ..EngineConfig::default()
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_features = 42\n").unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded.max_features, 42);
        assert_eq!(loaded.default_k, 5);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = EngineConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, EngineConfig::default());
    }

    #[test]
    fn test_zero_max_features_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_features = 0\n").unwrap();

        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, SimrecError::InvalidValue { .. }));
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_features = [").unwrap();

        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, SimrecError::Toml(_)));
    }
}
