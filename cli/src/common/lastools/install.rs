//! # LAStools Installation Layout
//!
//! File: cli/src/common/lastools/install.rs
//!
//! ## Overview
//!
//! Finds the LAStools executables. A toolbox script lives at
//! `<root>/ArcGIS_toolbox/scripts/<tool>.py`, so the install root is three
//! directory levels above the script, and executables sit in `<root>/bin`
//! named `<tool>64` (or `<tool>` for the old 32-bit builds) plus the platform
//! executable suffix.
//!
//! The root must not contain whitespace: LAStools cannot handle such paths.
//!
//! ## Resolution order
//!
//! 1. `--install-root` on the command line (the root itself)
//! 2. `--script` on the command line (three levels up)
//! 3. `[lastools] install_root` from the configuration (the root itself)
//! 4. the running `lasrun` binary (three levels up)
//!
use crate::common::report::Reporter;
use crate::core::error::{LasrunError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which build of a LAStools executable to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bitness {
    Bit64,
    /// Old 32-bit builds, whose return codes are unreliable.
    Bit32,
}

impl Bitness {
    /// Executable base name for `tool`, e.g. `las2iso64`.
    pub fn executable_name(self, tool: &str) -> String {
        match self {
            Bitness::Bit64 => format!("{}64", tool),
            Bitness::Bit32 => tool.to_string(),
        }
    }
}

/// Inputs for deciding where the LAStools installation lives.
#[derive(Debug, Clone, Default)]
pub struct InstallLocation {
    pub install_root: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub configured_root: Option<PathBuf>,
}

impl InstallLocation {
    /// Picks the install root following the documented precedence.
    ///
    /// The result is always absolute, so the whitespace check sees the whole path.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.install_root {
            debug!("Using install root from command line: {}", root.display());
            return absolute(root);
        }
        if let Some(script) = &self.script {
            return root_from_anchor(script);
        }
        if let Some(root) = &self.configured_root {
            debug!("Using install root from configuration: {}", root.display());
            return absolute(root);
        }
        let exe = std::env::current_exe().context("Failed to determine the lasrun executable path")?;
        root_from_anchor(&exe)
    }
}

/// `path` joined onto `base` unless it is already absolute.
fn absolute_in(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(absolute_in(&cwd, path))
}

/// Walks three levels up from `anchor` (the invoking script or binary).
pub fn root_from_anchor(anchor: &Path) -> Result<PathBuf> {
    let anchor = absolute(anchor)?;
    match anchor.ancestors().nth(3) {
        Some(root) => {
            debug!("Derived install root {} from {}", root.display(), anchor.display());
            Ok(root.to_path_buf())
        }
        None => Err(LasrunError::MissingInstallation {
            what: "the LAStools installation".to_string(),
            path: anchor,
        }
        .into()),
    }
}

/// Checks the install root and returns the full path of `exe_name`.
///
/// Progress lines go to `reporter` the way the toolbox prints them.
pub fn locate_executable<R: Reporter + ?Sized>(
    root: &Path,
    exe_name: &str,
    reporter: &mut R,
) -> Result<PathBuf> {
    let full_root = absolute(root)?;
    let root = full_root.as_path();
    if root.to_string_lossy().chars().any(char::is_whitespace) {
        reporter.message("Error. Path to the LAStools installation contains spaces.");
        reporter.message(&format!("This does not work: {}", root.display()));
        reporter.message("This would work:    C:\\software\\lastools");
        anyhow::bail!(LasrunError::InvalidPath {
            path: root.to_path_buf()
        });
    }

    let bin_dir = root.join("bin");
    if !bin_dir.is_dir() {
        reporter.message(&format!("Cannot find lastools/bin at {}", bin_dir.display()));
        anyhow::bail!(LasrunError::MissingInstallation {
            what: "lastools/bin".to_string(),
            path: bin_dir,
        });
    }
    reporter.message(&format!("Found {} ...", bin_dir.display()));

    let exe_file = format!("{}{}", exe_name, std::env::consts::EXE_SUFFIX);
    let exe_path = bin_dir.join(&exe_file);
    if !exe_path.is_file() {
        reporter.message(&format!("Cannot find {} at {}", exe_file, exe_path.display()));
        anyhow::bail!(LasrunError::MissingInstallation {
            what: exe_file,
            path: exe_path,
        });
    }
    reporter.message(&format!("Found {} ...", exe_path.display()));
    info!("Resolved {} to {}", exe_name, exe_path.display());
    Ok(exe_path)
}
