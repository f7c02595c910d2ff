//! # Lasrun Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! `lasrun` drives LAStools executables the way the ArcGIS toolbox scripts do,
//! and wraps the las2las → PotreeConverter pipeline. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the configuration and routing to the command handlers
//! - Exiting with the code the handler decided on
//!
//! ## Architecture
//!
//! - Every toolbox script is a top-level subcommand (`las2iso`, `lasthin`, ...)
//!   taking the script's positional parameter vector (`commands::lastools`).
//! - `potree` groups the Potree conversion commands (`commands::potree`).
//! - Toolbox commands return the LAStools exit code: 0 success, 1 warning,
//!   anything else an error. Any `Err` prints `Error: ...` and exits 1.
//!
//! ## Examples
//!
//! ```bash
//! # Thin a file, keeping the highest point per 0.5 unit cell
//! lasrun --install-root /opt/lastools lasthin in.laz 0,5 highest laz "#" "#" _thin "#" false false
//!
//! # Same, with the root derived from the toolbox script location
//! lasrun -vv --script /opt/lastools/ArcGIS_toolbox/scripts/lasthin.py lasthin ...
//!
//! # Convert a file for the Potree viewer
//! lasrun potree convert --input site.laz --name site
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Toolbox and Potree command handlers
mod common; // Shared utilities (process, report, lastools, fs)
mod core; // Core infrastructure (errors, config)

use crate::common::lastools::install::InstallLocation;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "lasrun",
    about = "Run LAStools the way the ArcGIS toolbox does, and publish point clouds with Potree",
    long_about = "Builds LAStools command lines from toolbox parameter vectors, runs them and\n\
                  reports their output, and converts LAS/LAZ files into Potree web pages.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file used instead of the user configuration.
    #[arg(long, global = true, env = "LASRUN_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Toolbox script path; the LAStools root is three levels above it.
    #[arg(long, global = true, env = "LASRUN_SCRIPT", value_name = "PATH")]
    script: Option<PathBuf>,

    /// LAStools installation root (the directory containing `bin`).
    #[arg(long, global = true, value_name = "DIR")]
    install_root: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Tool(commands::lastools::ToolCommand),
    /// Convert point clouds for the Potree web viewer.
    Potree(commands::potree::PotreeArgs),
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = core::config::load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Tool(command) => {
            let location = InstallLocation {
                install_root: cli.install_root,
                script: cli.script,
                configured_root: config.lastools.install_root.as_ref().map(PathBuf::from),
            };
            commands::lastools::handle_tool(command, &location)
        }
        Commands::Potree(args) => {
            commands::potree::handle_potree(args, &config)?;
            Ok(0)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn lasrun_cmd() -> Command {
        Command::cargo_bin("lasrun").expect("Failed to find lasrun binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        lasrun_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("las2iso"))
            .stdout(predicate::str::contains("potree"));
    }

    #[test]
    fn test_main_version_flag() {
        lasrun_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_parse_tool_with_sentinels() {
        let cli = Cli::try_parse_from([
            "lasrun", "--install-root", "/opt/lastools", "lasthin", "in.las", "1", "lowest", "#",
            "#", "#", "#", "-seed 4", "false", "false",
        ])
        .unwrap();
        assert_eq!(cli.install_root, Some(PathBuf::from("/opt/lastools")));
        match cli.command {
            Commands::Tool(commands::lastools::ToolCommand::Lasthin(args)) => {
                assert_eq!(args.params.len(), 10);
                assert_eq!(args.params[7], "-seed 4");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_lasground_alias() {
        let cli = Cli::try_parse_from(["lasrun", "lasground_new", "a", "b"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Tool(commands::lastools::ToolCommand::LasgroundNew(_))
        ));
    }
}
