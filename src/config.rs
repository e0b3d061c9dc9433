//! User configuration loaded from `config.toml`.

use crate::decode::DEFAULT_DECODE_URL;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "vincalc";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the decode service; the VIN is appended as a path segment.
    pub decode_url: String,
    /// Where the recents list is stored. Defaults to the user data directory.
    pub recents_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decode_url: DEFAULT_DECODE_URL.to_string(),
            recents_path: None,
        }
    }
}

impl Config {
    /// Default location: `<config dir>/vincalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Resolved location of the recents store.
    pub fn recents_path(&self) -> PathBuf {
        self.recents_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("store.json")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.decode_url, DEFAULT_DECODE_URL);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_toml(
            r#"
            decode_url = "http://localhost:8080/decode"
            recents_path = "/tmp/recents.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.decode_url, "http://localhost:8080/decode");
        assert_eq!(config.recents_path(), PathBuf::from("/tmp/recents.json"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "decode_url = 5").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
