//! # Lasrun Toolbox Commands
//!
//! File: cli/src/commands/lastools/mod.rs
//!
//! ## Overview
//!
//! One subcommand per ArcGIS toolbox script. Each receives the script's
//! positional parameter vector unchanged, turns it into a LAStools command line,
//! runs the executable and relays its output to the host.
//!
//! ## Architecture
//!
//! Every tool module implements [`Tool`]: a typed parse of its parameter vector
//! and the tokens it contributes. [`run_tool`] drives the shared pipeline:
//!
//! 1. Parse and validate the parameter vector (`ParamReader`).
//! 2. Report `Starting <exe> ...`.
//! 3. Resolve the install root and locate `<root>/bin/<exe>`.
//! 4. Build the `CommandLine`: executable, `-v` when verbose, tool tokens.
//! 5. Report the command line and run it with captured output.
//! 6. Classify the result, report the output and the closing line.
//! 7. Return the exit code for `main` to exit with.
//!
//! Early failures (bad vector, missing installation, spaces in the path) are
//! returned as errors and end with exit code 1.
//!
//! ## Usage
//!
//! ```bash
//! lasrun --script C:\lastools\ArcGIS_toolbox\scripts\lasthin.py \
//!     lasthin in.laz 0,5 highest laz "#" "#" _thin "#" false false
//! ```
//!
use crate::common::lastools::install::{self, Bitness, InstallLocation};
use crate::common::lastools::outcome::{classify, Outcome};
use crate::common::lastools::params::{Invocation, ParamReader};
use crate::common::process::{CaptureMode, CommandLine, Runner, SystemRunner};
use crate::common::report::{ConsoleReporter, Reporter};
use crate::core::error::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

mod blast2dem;
mod las2iso;
mod las2tin;
mod las3dpoly;
mod lasground_new;
mod lasthin;

/// The positional parameter vector of a toolbox script.
#[derive(Args, Debug)]
pub struct ToolArgs {
    /// Parameters in toolbox order; the last two are the 32-bit and verbose switches.
    /// Use `#` for optional parameters that are not set.
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "PARAM"
    )]
    pub params: Vec<String>,
}

/// Toolbox subcommands, one per LAStools executable.
#[derive(Subcommand, Debug)]
pub enum ToolCommand {
    /// Contour a LiDAR file with las2iso.
    #[command(name = "las2iso")]
    Las2iso(ToolArgs),
    /// Triangulate a LiDAR file into a TIN with las2tin.
    #[command(name = "las2tin")]
    Las2tin(ToolArgs),
    /// Thin a LiDAR file on a uniform grid with lasthin.
    #[command(name = "lasthin")]
    Lasthin(ToolArgs),
    /// Raster a folder of LiDAR files with blast2dem.
    #[command(name = "blast2dem")]
    Blast2dem(ToolArgs),
    /// Classify bare-earth points of a folder of LiDAR files with lasground_new.
    #[command(name = "lasground-new", alias = "lasground_new")]
    LasgroundNew(ToolArgs),
    /// Modify points near 3D polylines with las3dpoly.
    #[command(name = "las3dpoly")]
    Las3dpoly(ToolArgs),
}

/// A LAStools executable driven by a toolbox parameter vector.
pub trait Tool: Sized {
    /// Executable base name, without the `64` suffix.
    const NAME: &'static str;
    /// Number of tool fields, excluding the two trailing switches.
    const FIELDS: usize;
    /// Set for tools that ignore the 32-bit switch.
    const FIXED_BITNESS: Option<Bitness> = None;

    fn parse(reader: &mut ParamReader<'_>) -> Result<Self>;

    /// Appends this tool's tokens after the executable (and `-v`).
    fn push_tokens(&self, cmd: &mut CommandLine);
}

/// Everything a toolbox run needs from its surroundings.
pub struct ToolContext<'a> {
    pub location: &'a InstallLocation,
    pub runner: &'a dyn Runner,
    pub reporter: &'a mut dyn Reporter,
}

/// Parses `params` for `T`, returning the tool and its trailing switches.
fn parse_params<T: Tool>(params: &[String]) -> Result<(T, Invocation)> {
    let (mut reader, mut invocation) = ParamReader::new(T::NAME, params, T::FIELDS)?;
    let tool = T::parse(&mut reader)?;
    reader.finish()?;
    if let Some(bitness) = T::FIXED_BITNESS {
        invocation.bitness = bitness;
    }
    Ok((tool, invocation))
}

/// Builds the full command line for an already parsed tool.
fn build_command<T: Tool>(tool: &T, exe: PathBuf, invocation: &Invocation) -> CommandLine {
    let mut cmd = CommandLine::new(exe);
    if invocation.verbose {
        cmd.flag("-v");
    }
    tool.push_tokens(&mut cmd);
    cmd
}

/// Runs the toolbox pipeline for `T` and returns the process exit code.
pub fn run_tool<T: Tool>(ctx: &mut ToolContext<'_>, params: &[String]) -> Result<i32> {
    let (tool, invocation) = parse_params::<T>(params)?;
    let exe_name = invocation.bitness.executable_name(T::NAME);
    ctx.reporter.message(&format!("Starting {} ...", exe_name));

    let root = ctx.location.resolve_root()?;
    let exe = install::locate_executable(&root, &exe_name, &mut *ctx.reporter)?;

    let cmd = build_command(&tool, exe, &invocation);
    ctx.reporter.message("LAStools command line:");
    ctx.reporter.message(&cmd.to_string());

    let result = ctx.runner.run(&cmd, CaptureMode::Captured)?;
    let classification = classify(&result, invocation.bitness);
    debug!("{} classified as {:?}", exe_name, classification);

    let output = result.output.trim_end();
    if !output.is_empty() {
        ctx.reporter.report(classification.outcome.severity(), output);
    }
    match classification.outcome {
        Outcome::Success => ctx.reporter.message(&format!("Success. {} done.", exe_name)),
        Outcome::Warning => ctx.reporter.warning(&format!("Warnings. {} done.", exe_name)),
        Outcome::Error => ctx.reporter.error(&format!("Error. {} failed.", exe_name)),
    }
    info!("{} finished with exit code {}", exe_name, classification.exit_code);
    Ok(classification.exit_code)
}

/// Dispatches a toolbox subcommand with the console reporter and the system runner.
pub fn handle_tool(command: ToolCommand, location: &InstallLocation) -> Result<i32> {
    let mut reporter = ConsoleReporter;
    let runner = SystemRunner;
    let mut ctx = ToolContext {
        location,
        runner: &runner,
        reporter: &mut reporter,
    };
    match command {
        ToolCommand::Las2iso(args) => run_tool::<las2iso::Las2Iso>(&mut ctx, &args.params),
        ToolCommand::Las2tin(args) => run_tool::<las2tin::Las2Tin>(&mut ctx, &args.params),
        ToolCommand::Lasthin(args) => run_tool::<lasthin::LasThin>(&mut ctx, &args.params),
        ToolCommand::Blast2dem(args) => run_tool::<blast2dem::Blast2Dem>(&mut ctx, &args.params),
        ToolCommand::LasgroundNew(args) => {
            run_tool::<lasground_new::LasGroundNew>(&mut ctx, &args.params)
        }
        ToolCommand::Las3dpoly(args) => run_tool::<las3dpoly::Las3dPoly>(&mut ctx, &args.params),
    }
}
