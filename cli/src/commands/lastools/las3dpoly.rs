//! # las3dpoly: modify points close to 3D polylines
//!
//! File: cli/src/commands/lastools/las3dpoly.rs
//!
//! Only a 64-bit build of las3dpoly exists, so the 32-bit switch is accepted
//! and ignored.
//!
use super::Tool;
use crate::common::lastools::choices::{PointFormat, POLY_FORMATS};
use crate::common::lastools::install::Bitness;
use crate::common::lastools::output::{listed, read_additional, OutputTarget};
use crate::common::lastools::params::{normalize_decimal, ParamReader};
use crate::common::process::CommandLine;
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Las3dPoly {
    input: String,
    poly: String,
    distance: String,
    mode: Option<String>,
    /// Checkbox flags in dialog order, already resolved to their tokens.
    switches: Vec<&'static str>,
    classify: Option<String>,
    output: OutputTarget<PointFormat>,
    additional: Option<String>,
}

const SWITCHES: [&str; 6] = [
    "-match_all_above",
    "-match_all_below",
    "-remove_points",
    "-flag_as_withheld",
    "-flag_as_keypoint",
    "-flag_as_synthetic",
];

impl Tool for Las3dPoly {
    const NAME: &'static str = "las3dpoly";
    const FIELDS: usize = 17;
    const FIXED_BITNESS: Option<Bitness> = Some(Bitness::Bit64);

    fn parse(r: &mut ParamReader<'_>) -> Result<Self> {
        let input = r.text()?.to_string();
        let poly = r.text()?.to_string();
        let distance = normalize_decimal(r.text()?);
        let mode = r.optional()?.map(str::to_string);

        let mut switches = Vec::new();
        for flag in SWITCHES {
            if r.flag()? {
                switches.push(flag);
            }
        }

        let classify = r.flag()?;
        let class = r.text()?;
        Ok(Self {
            input,
            poly,
            distance,
            mode,
            switches,
            classify: classify.then(|| class.to_string()),
            output: OutputTarget::read(r, listed(POLY_FORMATS))?,
            additional: read_additional(r)?,
        })
    }

    fn push_tokens(&self, cmd: &mut CommandLine) {
        cmd.path_arg("-i", self.input.as_str());
        cmd.path_arg("-poly", self.poly.as_str());
        cmd.arg("-distance", self.distance.as_str());
        if let Some(mode) = &self.mode {
            cmd.split_words(mode);
        }
        for flag in &self.switches {
            cmd.flag(*flag);
        }
        if let Some(class) = &self.classify {
            cmd.arg("-classify", class.as_str());
        }
        self.output.push_tokens(cmd);
        if let Some(additional) = &self.additional {
            cmd.split_words(additional);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::parse_params;
    use super::*;

    const DEFAULTS: [&str; 19] = [
        "in.laz", "wires.shp", "1", "#", "false", "false", "false", "false", "false", "false",
        "false", "#", "#", "#", "#", "#", "#", "false", "false",
    ];

    #[test]
    fn test_required_fields_only() {
        let cmd = command_for::<Las3dPoly>(&DEFAULTS);
        assert_eq!(
            args_of(&cmd),
            vec!["-i", "in.laz", "-poly", "wires.shp", "-distance", "1"]
        );
    }

    #[test]
    fn test_always_64_bit() {
        let mut params = DEFAULTS;
        params[17] = "true";
        let (_, invocation) = parse_params::<Las3dPoly>(&strings(&params)).unwrap();
        assert_eq!(invocation.bitness, Bitness::Bit64);
    }

    #[test]
    fn test_switches_classify_and_mode() {
        let cmd = command_for::<Las3dPoly>(&[
            "in.laz",
            "wires.shp",
            "0,75",
            "-in_2d",
            "true",
            "false",
            "false",
            "true",
            "false",
            "true",
            "true",
            "14",
            "laz",
            "out.laz",
            "#",
            "#",
            "#",
            "false",
            "false",
        ]);
        assert_eq!(
            args_of(&cmd),
            vec![
                "-i", "in.laz", "-poly", "wires.shp", "-distance", "0.75", "-in_2d",
                "-match_all_above", "-flag_as_withheld", "-flag_as_synthetic", "-classify", "14",
                "-olaz", "-o", "out.laz",
            ]
        );
    }

    #[test]
    fn test_class_ignored_without_classify() {
        let mut params = DEFAULTS;
        params[11] = "14";
        let cmd = command_for::<Las3dPoly>(&params);
        assert!(!args_of(&cmd).contains(&"-classify"));
    }
}
