//! # Lasrun Potree Command Group
//!
//! File: cli/src/commands/potree/mod.rs
//!
//! ## Overview
//!
//! `lasrun potree` turns a LAS/LAZ file into a Potree web viewer page and
//! manages the paths it remembers between runs.
//!
//! - `convert`: runs `las2las` and then `PotreeConverter` (see `convert.rs`).
//! - `config show` / `config set`: reads and updates the saved paths.
//!
//! The settings file defaults to `[potree] settings_file` from the lasrun
//! configuration; `--settings` overrides it for a single run.
//!
use crate::common::process::SystemRunner;
use crate::common::report::ConsoleReporter;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::debug;

mod config;
mod convert;
mod settings;

use settings::JsonSettingsStore;

#[derive(Args, Debug)]
pub struct PotreeArgs {
    /// JSON file holding the saved paths.
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: PotreeCommand,
}

#[derive(Subcommand, Debug)]
enum PotreeCommand {
    /// Convert a LAS/LAZ file into a Potree page.
    Convert(convert::ConvertArgs),
    /// Show or change the saved paths.
    Config(config::ConfigArgs),
}

pub fn handle_potree(args: PotreeArgs, cfg: &Config) -> Result<()> {
    let path = args
        .settings
        .unwrap_or_else(|| cfg.potree.settings_path());
    let store = JsonSettingsStore::new(path);
    debug!("Using Potree settings file {}", store.path().display());
    let mut reporter = ConsoleReporter;

    match args.command {
        PotreeCommand::Convert(args) => {
            convert::handle_convert(args, &store, &SystemRunner, &mut reporter)
        }
        PotreeCommand::Config(args) => config::handle_config(args, &store, &mut reporter),
    }
}
