use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_COLLECTION: &str = "persons";
pub const URL_ENV: &str = "PHONEBOOK_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,

    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("could not encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub collection: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("phonebook.toml"))
    }

    /// True once the user has gone through server setup.
    pub fn exists() -> bool {
        Self::path().is_some_and(|p| p.is_file())
    }

    /// Loads from the user config dir, falling back to defaults when the file
    /// is missing or broken. `PHONEBOOK_URL` wins over the stored url.
    pub fn load() -> Self {
        let mut settings = match Self::path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                if path.exists() {
                    warn!("ignoring settings at {}: {}", path.display(), e);
                }
                Self::new()
            }),
            None => Self::new(),
        };
        if let Ok(url) = env::var(URL_ENV) {
            if !url.trim().is_empty() {
                debug!("{} overrides base url", URL_ENV);
                settings.base_url = crate::utils::normalize_url(&url);
            }
        }
        settings
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str::<Settings>(&text)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_from_nested_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("phonebook.toml");
        let settings = Settings {
            base_url: "http://phonebook.local:8080".into(),
            collection: "people".into(),
            log_level: "debug".into(),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phonebook.toml");
        fs::write(&path, "base_url = \"http://10.0.0.2:3001\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.base_url, "http://10.0.0.2:3001");
        assert_eq!(settings.collection, DEFAULT_COLLECTION);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn broken_file_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phonebook.toml");
        fs::write(&path, "base_url = ").unwrap();
        assert!(matches!(Settings::load_from(&path), Err(ConfigError::Decode(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = Settings::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
