//! # Output Parameter Block
//!
//! File: cli/src/common/lastools/output.rs
//!
//! Every toolbox dialog ends with the same four output fields: format, output
//! file, output directory and file-name appendix. Only the format lookup differs
//! between tools.
//!
use super::choices::{strict, OutputFormat, Table};
use super::params::ParamReader;
use crate::common::process::CommandLine;
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget<F> {
    pub format: Option<F>,
    pub file: Option<String>,
    pub dir: Option<String>,
    pub appendix: Option<String>,
}

impl<F: OutputFormat> OutputTarget<F> {
    /// Reads the four output fields, turning the format label into `F` with `resolve`.
    pub fn read(
        reader: &mut ParamReader<'_>,
        resolve: impl Fn(&str) -> Result<F>,
    ) -> Result<Self> {
        let format = reader.optional()?.map(resolve).transpose()?;
        Ok(Self {
            format,
            file: reader.optional()?.map(str::to_string),
            dir: reader.optional()?.map(str::to_string),
            appendix: reader.optional()?.map(str::to_string),
        })
    }

    pub fn push_tokens(&self, cmd: &mut CommandLine) {
        if let Some(format) = &self.format {
            format.push_tokens(cmd);
        }
        if let Some(file) = &self.file {
            cmd.path_arg("-o", file.as_str());
        }
        if let Some(dir) = &self.dir {
            cmd.path_arg("-odir", dir.as_str());
        }
        if let Some(appendix) = &self.appendix {
            cmd.path_arg("-odix", appendix.as_str());
        }
    }
}

/// Format resolver accepting exactly the labels in `formats`.
pub fn listed<F: Clone>(formats: Table<F>) -> impl Fn(&str) -> Result<F> {
    move |label: &str| strict("output format", formats, label)
}

/// Reads the free-text "additional options" field.
pub fn read_additional(reader: &mut ParamReader<'_>) -> Result<Option<String>> {
    Ok(reader.optional()?.map(str::to_string))
}
