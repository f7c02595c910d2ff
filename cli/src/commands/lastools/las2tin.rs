//! # las2tin: triangulate a LiDAR file
//!
//! File: cli/src/commands/lastools/las2tin.rs
//!
//! Parameters: input, concavity, class filter, lakes, creeks, the output block
//! (format, file, directory, appendix), additional options, then the two
//! trailing switches.
//!
use super::Tool;
use crate::common::lastools::choices::{
    lenient, ClassFilter, VectorFormat, CLASS_FILTERS, TIN_FORMATS,
};
use crate::common::lastools::output::{read_additional, OutputTarget};
use crate::common::lastools::params::{normalize_decimal, ParamReader};
use crate::common::process::CommandLine;
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Las2Tin {
    input: String,
    concavity: Option<String>,
    filter: Option<ClassFilter>,
    lakes: Option<String>,
    creeks: Option<String>,
    output: OutputTarget<VectorFormat>,
    additional: Option<String>,
}

impl Tool for Las2Tin {
    const NAME: &'static str = "las2tin";
    const FIELDS: usize = 10;

    fn parse(r: &mut ParamReader<'_>) -> Result<Self> {
        Ok(Self {
            input: r.text()?.to_string(),
            concavity: r.unless("50")?.map(normalize_decimal),
            filter: lenient("class filter", CLASS_FILTERS, r.text()?),
            lakes: r.optional()?.map(str::to_string),
            creeks: r.optional()?.map(str::to_string),
            output: OutputTarget::read(r, |label| VectorFormat::resolve(TIN_FORMATS, label))?,
            additional: read_additional(r)?,
        })
    }

    fn push_tokens(&self, cmd: &mut CommandLine) {
        cmd.path_arg("-i", self.input.as_str());
        if let Some(concavity) = &self.concavity {
            cmd.arg("-concavity", concavity.as_str());
        }
        if let Some(filter) = self.filter {
            filter.push_tokens(cmd);
            cmd.flag("-extra_pass");
        }
        if let Some(lakes) = &self.lakes {
            cmd.path_arg("-lakes", lakes.as_str());
        }
        if let Some(creeks) = &self.creeks {
            cmd.path_arg("-creeks", creeks.as_str());
        }
        self.output.push_tokens(cmd);
        if let Some(additional) = &self.additional {
            cmd.split_words(additional);
        }
    }
}
