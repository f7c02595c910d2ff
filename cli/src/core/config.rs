//! # Lasrun Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads the optional TOML configuration that tells lasrun where LAStools is
//! installed and where the Potree front-end keeps its remembered paths. Every
//! setting has a usable default, so running without any configuration file is
//! the common case.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.lasrun.toml` in the current directory or its ancestors
//!    (the search stops at the first directory holding `.git`)
//! 2. The user file: `--config FILE` when given, otherwise
//!    `<platform config dir>/config.toml`
//! 3. Default values defined in the code
//!
//! Paths are tilde-expanded and validated after merging.
//!
//! ## Examples
//!
//! ```toml
//! [lastools]
//! install_root = "~/software/lastools"
//!
//! [potree]
//! settings_file = "~/potree/config.json"
//! ```
//!
use crate::core::error::{LasrunError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub lastools: LastoolsConfig,
    #[serde(default)]
    pub potree: PotreeConfig,
}

/// Settings for the toolbox commands (`lasrun las2iso ...`).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct LastoolsConfig {
    /// Root of the LAStools installation (the directory holding `bin/`).
    /// When unset, the root is derived from the invoking script path.
    pub install_root: Option<String>,
}

/// Settings for the Potree pipeline (`lasrun potree ...`).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PotreeConfig {
    /// JSON file holding the remembered executable and output paths.
    /// Unset means `potree.json` in the platform config directory.
    pub settings_file: Option<String>,
}

impl PotreeConfig {
    /// The configured settings file, or the platform default.
    pub fn settings_path(&self) -> PathBuf {
        match &self.settings_file {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(default_settings_file()),
        }
    }
}

fn default_settings_file() -> String {
    match project_dirs() {
        Some(dirs) => dirs
            .config_dir()
            .join("potree.json")
            .to_string_lossy()
            .into_owned(),
        None => "potree.json".to_string(),
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "lasrun", "lasrun")
}

const PROJECT_CONFIG_FILENAME: &str = ".lasrun.toml";

/// Loads, merges, expands and validates the configuration.
///
/// `user_override` replaces the platform user file; unlike the implicit user
/// file it must exist.
pub fn load_config(user_override: Option<&Path>) -> Result<Config> {
    let user_config = match user_override {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => load_user_config()?,
    };
    let project_config = load_project_config()?;
    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(dirs) = project_dirs() else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = dirs.config_dir().join("config.toml");
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!("User configuration file not found at {}", config_path.display());
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!("Found .git at {}, stopping project config search.", dir.display());
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        lastools: LastoolsConfig {
            install_root: project.lastools.install_root.or(user.lastools.install_root),
        },
        potree: PotreeConfig {
            settings_file: project.potree.settings_file.or(user.potree.settings_file),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(root) = config.lastools.install_root.as_mut() {
        let expanded = shellexpand::tilde(root.as_str()).into_owned();
        *root = expanded;
        debug!("Expanded LAStools install root: {}", root);
    }
    if let Some(settings) = config.potree.settings_file.as_mut() {
        let expanded = shellexpand::tilde(settings.as_str()).into_owned();
        *settings = expanded;
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(root) = &config.lastools.install_root {
        if root.trim().is_empty() {
            return Err(anyhow!(LasrunError::Config(
                "lastools.install_root cannot be empty.".to_string()
            )));
        }
    }
    if let Some(settings) = &config.potree.settings_file {
        if settings.trim().is_empty() {
            return Err(anyhow!(LasrunError::Config(
                "potree.settings_file cannot be empty.".to_string()
            )));
        }
    }
    let settings = config.potree.settings_path();
    if settings.is_dir() {
        return Err(anyhow!(LasrunError::Config(format!(
            "Configured settings path '{}' is a directory, expected a file.",
            settings.display()
        ))));
    }
    Ok(())
}
