//! # Lasrun CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration test crates: a `lasrun` command isolated
//! from the user's configuration, and fake executables written as shell
//! scripts.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// `lasrun` running in `dir` with an empty configuration file there.
pub fn lasrun_cmd(dir: &Path) -> Command {
    let config = dir.join("lasrun.toml");
    if !config.exists() {
        fs::write(&config, "").expect("Failed to write empty test config");
    }
    let mut cmd = Command::cargo_bin("lasrun").expect("Failed to find lasrun binary for testing");
    cmd.current_dir(dir)
        .env("LASRUN_CONFIG", &config)
        .env_remove("LASRUN_SCRIPT")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes an executable `/bin/sh` script at `path`.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create script directory");
    }
    fs::write(path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
    let mut perms = fs::metadata(path).expect("Failed to stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to make script executable");
    path.to_path_buf()
}

/// Creates `<root>/bin/<exe>` running `body`.
#[cfg(unix)]
pub fn fake_tool(root: &Path, exe: &str, body: &str) -> PathBuf {
    write_script(&root.join("bin").join(exe), body)
}
