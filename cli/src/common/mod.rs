//! # Lasrun Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers:
//!
//! - **`fs`**: small filesystem helpers (optional reads, writes creating parents).
//! - **`lastools`**: parameter vectors, choice tables, install layout and outcome
//!   classification for LAStools invocations.
//! - **`process`**: the typed `CommandLine` and the `Runner` that spawns it.
//! - **`report`**: the message / warning / error channel back to the host.
//!

/// Filesystem helpers.
pub mod fs;
/// LAStools invocation building blocks.
pub mod lastools;
/// External process execution.
pub mod process;
/// User-facing reporting channel.
pub mod report;
