//! # lasground_new: classify bare-earth points
//!
//! File: cli/src/commands/lastools/lasground_new.rs
//!
//! The terrain step and granularity drop-downs carry labels such as
//! `5=nature` and `6=fine`; only the number before `=` reaches the command
//! line.
//!
use super::Tool;
use crate::common::lastools::choices::{PointFormat, GROUND_FORMATS};
use crate::common::lastools::input::FolderInput;
use crate::common::lastools::output::{listed, read_additional, OutputTarget};
use crate::common::lastools::params::ParamReader;
use crate::common::process::CommandLine;
use crate::core::error::Result;

/// `"5=nature"` → `"5"`.
fn leading_number(label: &str) -> String {
    label.split('=').next().unwrap_or(label).trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LasGroundNew {
    input: FolderInput,
    merged: bool,
    airborne: bool,
    feet: bool,
    elevation_feet: bool,
    step: Option<String>,
    sub: Option<String>,
    spike: Option<String>,
    compute_height: bool,
    replace_z: bool,
    store_in_user_data: bool,
    output: OutputTarget<PointFormat>,
    cores: Option<String>,
    additional: Option<String>,
}

impl Tool for LasGroundNew {
    const NAME: &'static str = "lasground_new";
    const FIELDS: usize = 18;

    fn parse(r: &mut ParamReader<'_>) -> Result<Self> {
        Ok(Self {
            input: FolderInput::read(r)?,
            merged: r.flag()?,
            airborne: r.flag()?,
            feet: r.flag()?,
            elevation_feet: r.flag()?,
            step: r.optional()?.map(leading_number),
            sub: r.optional()?.map(leading_number),
            spike: r.unless("0")?.map(str::to_string),
            compute_height: r.flag()?,
            replace_z: r.flag()?,
            store_in_user_data: r.flag()?,
            output: OutputTarget::read(r, listed(GROUND_FORMATS))?,
            cores: r.unless("1")?.map(str::to_string),
            additional: read_additional(r)?,
        })
    }

    fn push_tokens(&self, cmd: &mut CommandLine) {
        self.input.push_tokens(cmd);
        if self.merged {
            cmd.flag("-merged");
        }
        if !self.airborne {
            cmd.flag("-not_airborne");
        }
        if self.feet {
            cmd.flag("-feet");
        }
        if self.elevation_feet {
            cmd.flag("-elevation_feet");
        }
        if let Some(step) = &self.step {
            cmd.arg("-step", step.as_str());
        }
        if let Some(sub) = &self.sub {
            cmd.arg("-sub", sub.as_str());
        }
        if let Some(spike) = &self.spike {
            cmd.arg("-spike", spike.as_str());
        }
        if self.compute_height {
            cmd.flag("-compute_height");
        }
        if self.replace_z {
            cmd.flag("-replace_z");
        }
        if self.store_in_user_data {
            cmd.flag("-store_in_user_data");
        }
        self.output.push_tokens(cmd);
        if let Some(cores) = &self.cores {
            cmd.arg("-cores", cores.as_str());
        }
        if let Some(additional) = &self.additional {
            cmd.split_words(additional);
        }
    }
}
