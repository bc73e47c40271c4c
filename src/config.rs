//! Preference storage for folio
//!
//! A flat key-value table persisted as toml.
//! File location: ~/.config/folio/prefs.toml

use crate::theme::PrefStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Persisted preference entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    pub entries: BTreeMap<String, String>,
}

/// File-backed preference store. Entries are held in memory and written
/// through to disk on every set.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    prefs: Prefs,
}

impl FileStore {
    /// Get the preferences file path.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("folio");
        Ok(config_dir.join("prefs.toml"))
    }

    /// Load the store from the default location.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(Self::default_path()?))
    }

    /// Load the store from `path`, or start empty if the file is missing.
    /// An unreadable or malformed file also degrades to the empty store;
    /// losing a preference is preferable to refusing to start.
    pub fn load_from(path: PathBuf) -> Self {
        let prefs = fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();

        Self { path, prefs }
    }

    /// Save the current entries to disk.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(&self.prefs)
            .context("Failed to serialize preferences")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences to {:?}", self.path))?;

        Ok(())
    }
}

impl PrefStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.prefs
            .entries
            .insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::load_from(dir.path().join("prefs.toml"));
        assert!(store.get("portfolio-theme").is_none());
    }

    #[test]
    fn test_set_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut store = FileStore::load_from(path.clone());
        store.set("portfolio-theme", "dark").unwrap();

        let reloaded = FileStore::load_from(path);
        assert_eq!(reloaded.get("portfolio-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut store = FileStore::load_from(path);
        store.set("portfolio-theme", "dark").unwrap();
        store.set("portfolio-theme", "light").unwrap();

        assert_eq!(store.get("portfolio-theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let store = FileStore::load_from(path);
        assert!(store.get("portfolio-theme").is_none());
    }
}
