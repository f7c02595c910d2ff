//! # Potree Settings Store
//!
//! File: cli/src/commands/potree/settings.rs
//!
//! ## Overview
//!
//! The converter remembers three paths between runs: the `las2las` executable,
//! the `PotreeConverter` executable and the last output directory. They are
//! stored as a small JSON object:
//!
//! ```json
//! {
//!   "lastools": "C:\\LAStools\\bin\\las2las64.exe",
//!   "potree": "C:\\PotreeConverter\\PotreeConverter.exe",
//!   "output_dir": "C:\\www\\pointclouds"
//! }
//! ```
//!
//! Access goes through the [`SettingsStore`] trait so the convert and config
//! handlers can be tested against an in-memory store.
//!
use crate::common::fs::io::{read_optional_file, write_string_to_file};
use crate::core::error::{LasrunError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Remembered paths. Missing keys load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PotreeSettings {
    pub lastools: String,
    pub potree: String,
    pub output_dir: String,
}

impl PotreeSettings {
    /// Overwrites the fields given in `update`, keeping the rest.
    pub fn merge(&mut self, update: SettingsUpdate) {
        if let Some(lastools) = update.lastools {
            self.lastools = lastools;
        }
        if let Some(potree) = update.potree {
            self.potree = potree;
        }
        if let Some(output_dir) = update.output_dir {
            self.output_dir = output_dir;
        }
    }
}

/// Partial settings from `lasrun potree config set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub lastools: Option<String>,
    pub potree: Option<String>,
    pub output_dir: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.lastools.is_none() && self.potree.is_none() && self.output_dir.is_none()
    }
}

pub trait SettingsStore {
    fn load(&self) -> Result<PotreeSettings>;
    fn save(&self, settings: &PotreeSettings) -> Result<()>;
}

/// Settings kept in a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    /// A missing file yields empty settings.
    fn load(&self) -> Result<PotreeSettings> {
        let Some(content) = read_optional_file(&self.path)? else {
            debug!("No Potree settings at {}", self.path.display());
            return Ok(PotreeSettings::default());
        };
        serde_json::from_str(&content).map_err(|e| {
            LasrunError::Config(format!(
                "Failed to parse Potree settings {}: {}",
                self.path.display(),
                e
            ))
            .into()
        })
    }

    fn save(&self, settings: &PotreeSettings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings).map_err(|e| {
            LasrunError::Config(format!("Failed to serialize Potree settings: {}", e))
        })?;
        write_string_to_file(&self.path, &json)?;
        info!("Saved Potree settings to {}", self.path.display());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonSettingsStore::new(temp.path().join("potree.json"));
        assert_eq!(store.load()?, PotreeSettings::default());
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonSettingsStore::new(temp.path().join("nested").join("potree.json"));
        let settings = PotreeSettings {
            lastools: "/opt/lastools/bin/las2las64".to_string(),
            potree: "/opt/potree/PotreeConverter".to_string(),
            output_dir: "/srv/www".to_string(),
        };
        store.save(&settings)?;
        assert_eq!(store.load()?, settings);

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.path())?)?;
        assert_eq!(raw["output_dir"], "/srv/www");
        Ok(())
    }

    #[test]
    fn test_partial_file_defaults_missing_keys() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("potree.json");
        fs::write(&path, r#"{"potree": "/bin/PotreeConverter"}"#)?;
        let settings = JsonSettingsStore::new(&path).load()?;
        assert_eq!(settings.potree, "/bin/PotreeConverter");
        assert!(settings.lastools.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_a_config_error() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("potree.json");
        fs::write(&path, "{ not json")?;
        let err = JsonSettingsStore::new(&path).load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LasrunError>(),
            Some(LasrunError::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut settings = PotreeSettings {
            lastools: "a".to_string(),
            potree: "b".to_string(),
            output_dir: "c".to_string(),
        };
        settings.merge(SettingsUpdate {
            potree: Some("B".to_string()),
            ..Default::default()
        });
        assert_eq!(settings.lastools, "a");
        assert_eq!(settings.potree, "B");
        assert_eq!(settings.output_dir, "c");
        assert!(SettingsUpdate::default().is_empty());
    }
}
