//! # Lasrun Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! Error types shared by the toolbox commands and the Potree pipeline.
//!
//! ## Architecture
//!
//! - `LasrunError`: a `thiserror` enum naming every failure the tool reports on its own
//!   (missing installation, invalid install path, malformed parameter vectors, failed
//!   child processes, configuration problems).
//! - `Result<T>`: an alias for `anyhow::Result<T>` so I/O failures can carry context.
//!
//! A warning or error *classified from a LAStools run* is not an `Err`: it is
//! an exit code forwarded to the host. Errors in this module stop the pipeline
//! before or around the child process and always end with exit code 1.
//!
//! ## Examples
//!
//! ```rust
//! if root.to_string_lossy().chars().any(char::is_whitespace) {
//!     anyhow::bail!(LasrunError::InvalidPath { path: root.to_path_buf() });
//! }
//!
//! let text = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read settings: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the lasrun application.
#[derive(Error, Debug)]
pub enum LasrunError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// The LAStools `bin` directory or the requested executable is absent.
    #[error("Cannot find {what} at {}", path.display())]
    MissingInstallation { what: String, path: PathBuf },

    /// The install root contains whitespace, which the LAStools executables cannot handle.
    #[error("Path to the LAStools installation contains spaces: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("{tool} expects {expected} parameters but received {found}")]
    ParameterCount {
        tool: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid value '{value}' for {field}")]
    InvalidParameter { field: &'static str, value: String },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}")]
    ProcessFailure { cmd: String, status: String },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error so callers can attach context.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let count = LasrunError::ParameterCount {
            tool: "lasthin",
            expected: 10,
            found: 7,
        };
        assert_eq!(
            count.to_string(),
            "lasthin expects 10 parameters but received 7"
        );

        let missing = LasrunError::MissingInstallation {
            what: "lasthin64".into(),
            path: PathBuf::from("/opt/lastools/bin/lasthin64"),
        };
        assert_eq!(
            missing.to_string(),
            "Cannot find lasthin64 at /opt/lastools/bin/lasthin64"
        );

        let invalid = LasrunError::InvalidParameter {
            field: "output format",
            value: "gif".into(),
        };
        assert_eq!(invalid.to_string(), "Invalid value 'gif' for output format");
    }

    #[test]
    fn test_spawn_error_keeps_source() {
        let err = LasrunError::Spawn {
            program: "las2las".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to start las2las"));
    }
}
