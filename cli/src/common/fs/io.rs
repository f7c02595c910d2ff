//! # Lasrun Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that attach context to failures:
//! - **`ensure_dir_exists`**: creates a directory tree, rejecting paths that are files.
//! - **`read_optional_file`**: reads a file to a string, treating "not found" as `None`.
//! - **`write_string_to_file`**: writes a string, creating parent directories first.
//!
//! The Potree settings store is the main caller: it must tolerate a settings
//! file that was never saved and must create its config directory on first save.
//!
use crate::core::error::{LasrunError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(LasrunError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the whole file at `path`, returning `Ok(None)` when it does not exist.
pub fn read_optional_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("File not found, treating as absent: {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}

/// Writes `content` to `path`, overwriting it and creating missing parent directories.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
