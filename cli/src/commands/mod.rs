//! # Lasrun Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Command Groups
//!
//! - `lastools`: one subcommand per ArcGIS toolbox script (`las2iso`, `las2tin`,
//!   `lasthin`, `blast2dem`, `lasground-new`, `las3dpoly`).
//! - `potree`: the las2las → PotreeConverter pipeline and its saved settings.
//!
//! Each group defines its own arguments and a handler that `main.rs` routes to.
//!

/// Toolbox commands that build, run and report a LAStools command line.
pub mod lastools;
/// Potree conversion and settings commands.
pub mod potree;
