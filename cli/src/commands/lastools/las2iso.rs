//! # las2iso: contour a LiDAR file
//!
//! File: cli/src/commands/lastools/las2iso.rs
//!
//! Parameter vector (17 entries):
//!
//! | # | field | tokens |
//! |---|-------|--------|
//! | 1 | input | `-i <file>` |
//! | 2 | concavity | `-concavity <x>` unless `50` |
//! | 3 | class filter | `-keep_class <codes> -extra_pass` |
//! | 4 | iso spacing | selects the flag for field 5 |
//! | 5 | iso amount | `-iso_number` (unless `10`), `-iso_every`, `-iso_value` |
//! | 6 | smooth | `-smooth <n>` unless `do not smooth` |
//! | 7 | simplify | `-simplify <n>` unless `do not simplify` |
//! | 8 | clean | `-clean <n>` unless `do not clean` |
//! | 9 | lakes | `-lakes <file>` |
//! | 10 | creeks | `-creeks <file>` |
//! | 11-14 | output | `-o<format>`, file, directory, appendix |
//! | 15 | additional options | verbatim |
//! | 16-17 | 32-bit, verbose | |
//!
use super::Tool;
use crate::common::lastools::choices::{
    lenient, ClassFilter, IsoSpacing, VectorFormat, CLASS_FILTERS, CONTOUR_FORMATS, ISO_SPACINGS,
};
use crate::common::lastools::output::{read_additional, OutputTarget};
use crate::common::lastools::params::{normalize_decimal, ParamReader};
use crate::common::process::CommandLine;
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Las2Iso {
    input: String,
    concavity: Option<String>,
    filter: Option<ClassFilter>,
    iso: Option<(&'static str, String)>,
    smooth: Option<String>,
    simplify: Option<String>,
    clean: Option<String>,
    lakes: Option<String>,
    creeks: Option<String>,
    output: OutputTarget<VectorFormat>,
    additional: Option<String>,
}

/// Resolves the iso spacing drop-down and its amount into a flag and value.
fn iso_arg(spacing: Option<IsoSpacing>, amount: &str) -> Option<(&'static str, String)> {
    match spacing? {
        IsoSpacing::Count if amount == "10" => None,
        IsoSpacing::Count => Some(("-iso_number", amount.to_string())),
        IsoSpacing::Every => Some(("-iso_every", normalize_decimal(amount))),
        IsoSpacing::Value => Some(("-iso_value", normalize_decimal(amount))),
    }
}

impl Tool for Las2Iso {
    const NAME: &'static str = "las2iso";
    const FIELDS: usize = 15;

    fn parse(r: &mut ParamReader<'_>) -> Result<Self> {
        let input = r.text()?.to_string();
        let concavity = r.unless("50")?.map(normalize_decimal);
        let filter = lenient("class filter", CLASS_FILTERS, r.text()?);
        let spacing = lenient("iso spacing", ISO_SPACINGS, r.text()?);
        let iso = iso_arg(spacing, r.text()?);
        Ok(Self {
            input,
            concavity,
            filter,
            iso,
            smooth: r.unless("do not smooth")?.map(str::to_string),
            simplify: r.unless("do not simplify")?.map(str::to_string),
            clean: r.unless("do not clean")?.map(str::to_string),
            lakes: r.optional()?.map(str::to_string),
            creeks: r.optional()?.map(str::to_string),
            output: OutputTarget::read(r, |label| VectorFormat::resolve(CONTOUR_FORMATS, label))?,
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
        if let Some((flag, value)) = &self.iso {
            cmd.arg(flag, value.as_str());
        }
        if let Some(smooth) = &self.smooth {
            cmd.arg("-smooth", smooth.as_str());
        }
        if let Some(simplify) = &self.simplify {
            cmd.arg("-simplify", simplify.as_str());
        }
        if let Some(clean) = &self.clean {
            cmd.arg("-clean", clean.as_str());
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
