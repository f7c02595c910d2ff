//! # Potree Conversion (`lasrun potree convert`)
//!
//! File: cli/src/commands/potree/convert.rs
//!
//! ## Overview
//!
//! Converts a LAS/LAZ file into a Potree web viewer page in two steps:
//!
//! 1. `las2las -i <input> -o <dir>/<stem>_fixed.las` rewrites the file with a
//!    corrected header and bounding box.
//! 2. `PotreeConverter <fixed> -o <output_dir> --generate-page <name>` builds the
//!    octree and the `<name>.html` page.
//!
//! Executables and the output directory come from the command line first and
//! from the saved settings otherwise. A non-zero exit from either step stops the
//! pipeline.
//!
//! ## Usage
//!
//! ```bash
//! lasrun potree convert --input scans/site.laz --name site --output-dir /srv/www
//! lasrun potree convert -i scans/site.laz -n site --capture
//! ```
//!
use super::settings::{PotreeSettings, SettingsStore};
use crate::common::process::{CaptureMode, CommandLine, Runner};
use crate::common::report::Reporter;
use crate::core::error::{LasrunError, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// LAS or LAZ file to convert.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Project name, used for the generated `<name>.html` page.
    #[arg(short, long)]
    pub name: String,

    /// Output directory (defaults to the saved `output_dir`).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// las2las executable (defaults to the saved `lastools`).
    #[arg(long, value_name = "EXE")]
    pub las2las: Option<String>,

    /// PotreeConverter executable (defaults to the saved `potree`).
    #[arg(long, value_name = "EXE")]
    pub potree: Option<String>,

    /// Capture the converters' output and relay it instead of streaming it.
    #[arg(long)]
    pub capture: bool,
}

/// Fully resolved inputs for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    pub las2las: PathBuf,
    pub potree: PathBuf,
    pub input: PathBuf,
    pub fixed: PathBuf,
    pub output_dir: PathBuf,
    pub name: String,
}

/// `<dir>/<stem>_fixed.las` next to the input.
fn fixed_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_fixed.las", stem))
}

/// First non-empty value of the argument and the saved setting.
fn pick(arg: Option<&str>, saved: &str) -> Option<String> {
    arg.filter(|v| !v.trim().is_empty())
        .or(Some(saved).filter(|v| !v.trim().is_empty()))
        .map(str::to_string)
}

impl ConversionPlan {
    pub fn resolve(args: &ConvertArgs, settings: &PotreeSettings) -> Result<Self> {
        let las2las = pick(args.las2las.as_deref(), &settings.lastools);
        let potree = pick(args.potree.as_deref(), &settings.potree);
        let output_dir = pick(args.output_dir.as_deref(), &settings.output_dir);
        let name = Some(args.name.trim()).filter(|n| !n.is_empty());
        let has_input = !args.input.as_os_str().is_empty();

        let (Some(las2las), Some(potree), Some(output_dir), Some(name), true) =
            (las2las, potree, output_dir, name, has_input)
        else {
            anyhow::bail!(LasrunError::InvalidParameter {
                field: "potree convert",
                value: "Fill in every field and configure both executables".to_string(),
            });
        };

        Ok(Self {
            las2las: PathBuf::from(las2las),
            potree: PathBuf::from(potree),
            fixed: fixed_path(&args.input),
            input: args.input.clone(),
            output_dir: PathBuf::from(output_dir),
            name: name.to_string(),
        })
    }

    /// Step 1: rewrite the input with las2las.
    pub fn fix_command(&self) -> CommandLine {
        let mut cmd = CommandLine::new(&self.las2las);
        cmd.path_arg("-i", self.input.to_string_lossy())
            .path_arg("-o", self.fixed.to_string_lossy());
        cmd
    }

    /// Step 2: build the octree and viewer page.
    pub fn convert_command(&self) -> CommandLine {
        let mut cmd = CommandLine::new(&self.potree);
        cmd.path(self.fixed.to_string_lossy())
            .path_arg("-o", self.output_dir.to_string_lossy())
            .arg("--generate-page", self.name.as_str());
        cmd
    }

    /// The page PotreeConverter generates.
    pub fn page(&self) -> PathBuf {
        self.output_dir.join(format!("{}.html", self.name))
    }
}

fn run_step<R: Reporter + ?Sized>(
    runner: &dyn Runner,
    reporter: &mut R,
    cmd: &CommandLine,
    mode: CaptureMode,
) -> Result<()> {
    let result = runner.run(cmd, mode)?;
    let output = result.output.trim_end();
    if !output.is_empty() {
        reporter.message(output);
    }
    if result.code != Some(0) {
        let status = match result.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        reporter.error(&format!("Conversion failed: {}", cmd));
        anyhow::bail!(LasrunError::ProcessFailure {
            cmd: cmd.to_string(),
            status,
        });
    }
    Ok(())
}

/// Runs both conversion steps.
pub fn run_conversion<R: Reporter + ?Sized>(
    plan: &ConversionPlan,
    runner: &dyn Runner,
    reporter: &mut R,
    mode: CaptureMode,
) -> Result<()> {
    reporter.message("Fixing LAS/LAZ file ...");
    run_step(runner, reporter, &plan.fix_command(), mode)?;

    reporter.message("Converting to Potree ...");
    run_step(runner, reporter, &plan.convert_command(), mode)?;

    reporter.message(&format!(
        "Conversion finished! Page: {}",
        plan.page().display()
    ));
    Ok(())
}

pub fn handle_convert<R: Reporter + ?Sized>(
    args: ConvertArgs,
    store: &dyn SettingsStore,
    runner: &dyn Runner,
    reporter: &mut R,
) -> Result<()> {
    let settings = store.load()?;
    let plan = ConversionPlan::resolve(&args, &settings)?;
    debug!("Conversion plan: {:?}", plan);
    let mode = if args.capture {
        CaptureMode::Captured
    } else {
        CaptureMode::Console
    };
    run_conversion(&plan, runner, reporter, mode)?;
    info!("Potree page written to {}", plan.page().display());
    Ok(())
}
