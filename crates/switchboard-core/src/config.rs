//! Workspace configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database file holding the key-value store
    pub database_path: PathBuf,
    /// Key the open-tab session is persisted under
    pub session_key: String,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("switchboard.db"),
            session_key: switchboard_session::DEFAULT_SESSION_KEY.to_string(),
            log_filter: "info".to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Switchboard"))
            .unwrap_or_else(|| PathBuf::from(".switchboard"))
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.session_key.trim().is_empty() {
            return Err(CoreError::Config("session_key cannot be empty".to_string()));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(CoreError::Config("database_path cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = Config::new(PathBuf::from("/tmp/sb"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/sb/switchboard.db"));
        assert_eq!(config.session_key, "session.tabs");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"session_key": "work.tabs"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.session_key, "work.tabs");
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.database_path, Config::default().database_path);
    }

    #[test]
    fn test_load_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ session_key").unwrap();
        assert!(matches!(Config::load(&path), Err(CoreError::Serialization(_))));

        let path = dir.path().join("blank_key.json");
        std::fs::write(&path, r#"{"session_key": "  "}"#).unwrap();
        assert!(matches!(Config::load(&path), Err(CoreError::Config(_))));

        assert!(matches!(
            Config::load(dir.path().join("missing.json")),
            Err(CoreError::Io(_))
        ));
    }
}
