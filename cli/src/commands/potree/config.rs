//! # Potree Settings Commands (`lasrun potree config`)
//!
//! File: cli/src/commands/potree/config.rs
//!
//! `show` prints the saved paths; `set` merges new values into them and saves.
//!
//! ```bash
//! lasrun potree config set --las2las /opt/lastools/bin/las2las64 --potree ~/bin/PotreeConverter
//! lasrun potree config show
//! ```
//!
use super::settings::{SettingsStore, SettingsUpdate};
use crate::common::report::Reporter;
use crate::core::error::{LasrunError, Result};
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the saved executable paths and output directory.
    Show,
    /// Save one or more paths, keeping the others.
    Set(SetArgs),
}

#[derive(Args, Debug, Default)]
pub struct SetArgs {
    /// Path of the las2las executable.
    #[arg(long, value_name = "EXE")]
    pub las2las: Option<String>,

    /// Path of the PotreeConverter executable.
    #[arg(long, value_name = "EXE")]
    pub potree: Option<String>,

    /// Default output directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,
}

pub fn handle_config<R: Reporter + ?Sized>(
    args: ConfigArgs,
    store: &dyn SettingsStore,
    reporter: &mut R,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let settings = store.load()?;
            reporter.message(&format!("lastools:   {}", settings.lastools));
            reporter.message(&format!("potree:     {}", settings.potree));
            reporter.message(&format!("output_dir: {}", settings.output_dir));
        }
        ConfigAction::Set(set) => {
            let update = SettingsUpdate {
                lastools: set.las2las,
                potree: set.potree,
                output_dir: set.output_dir,
            };
            if update.is_empty() {
                anyhow::bail!(LasrunError::ArgumentParsing(
                    "Give at least one of --las2las, --potree or --output-dir".to_string()
                ));
            }
            let mut settings = store.load()?;
            settings.merge(update);
            store.save(&settings)?;
            reporter.message("Settings saved.");
        }
    }
    Ok(())
}
