//! # lasthin: thin a LiDAR file on a uniform grid
//!
//! File: cli/src/commands/lastools/lasthin.rs
//!
use super::Tool;
use crate::common::lastools::choices::{lenient, PointFormat, ThinKeep, THIN_FORMATS, THIN_KEEPS};
use crate::common::lastools::output::{listed, read_additional, OutputTarget};
use crate::common::lastools::params::{normalize_decimal, ParamReader};
use crate::common::process::CommandLine;
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LasThin {
    input: String,
    step: Option<String>,
    keep: ThinKeep,
    output: OutputTarget<PointFormat>,
    additional: Option<String>,
}

impl Tool for LasThin {
    const NAME: &'static str = "lasthin";
    const FIELDS: usize = 8;

    fn parse(r: &mut ParamReader<'_>) -> Result<Self> {
        Ok(Self {
            input: r.text()?.to_string(),
            step: r.unless("1")?.map(normalize_decimal),
            keep: lenient("thin keep", THIN_KEEPS, r.text()?).unwrap_or_default(),
            output: OutputTarget::read(r, listed(THIN_FORMATS))?,
            additional: read_additional(r)?,
        })
    }

    fn push_tokens(&self, cmd: &mut CommandLine) {
        cmd.path_arg("-i", self.input.as_str());
        if let Some(step) = &self.step {
            cmd.arg("-step", step.as_str());
        }
        if let Some(flag) = self.keep.flag() {
            cmd.flag(flag);
        }
        self.output.push_tokens(cmd);
        if let Some(additional) = &self.additional {
            cmd.split_words(additional);
        }
    }
}
