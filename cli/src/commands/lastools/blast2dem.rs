//! # blast2dem: raster a folder of LiDAR files
//!
//! File: cli/src/commands/lastools/blast2dem.rs
//!
//! Besides the usual fields, the raster dialog carries hillshade lighting and a
//! value range for color ramps. Lighting is only read when the product is a
//! hillshade, and the default sun (north east at 1 pm) emits nothing. The value
//! range only applies to gray ramps and false colors, and only when both ends
//! are set.
//!
use super::Tool;
use crate::common::lastools::choices::{
    lenient, strict, LightDirection, LightTime, RasterAttribute, RasterFilter, RasterFormat,
    RasterProduct, LIGHT_DIRECTIONS, LIGHT_TIMES, RASTER_ATTRIBUTES, RASTER_FILTERS,
    RASTER_PRODUCTS,
};
use crate::common::lastools::input::FolderInput;
use crate::common::lastools::output::{read_additional, OutputTarget};
use crate::common::lastools::params::{normalize_decimal, ParamReader};
use crate::common::process::CommandLine;
use crate::core::error::Result;

const DEFAULT_LIGHT: (&str, &str) = ("north east", "1 pm");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blast2Dem {
    input: FolderInput,
    merged: bool,
    step: Option<String>,
    kill: Option<String>,
    attribute: RasterAttribute,
    product: RasterProduct,
    light: Option<(LightDirection, LightTime)>,
    min_max: Option<(String, String)>,
    filter: Option<RasterFilter>,
    use_tile_bb: bool,
    output: OutputTarget<RasterFormat>,
    additional: Option<String>,
}

impl Tool for Blast2Dem {
    const NAME: &'static str = "blast2dem";
    const FIELDS: usize = 18;

    fn parse(r: &mut ParamReader<'_>) -> Result<Self> {
        let input = FolderInput::read(r)?;
        let merged = r.flag()?;
        let step = r.unless("1")?.map(normalize_decimal);
        let kill = r.unless("100")?.map(normalize_decimal);
        let attribute = lenient("raster attribute", RASTER_ATTRIBUTES, r.text()?).unwrap_or_default();
        let product = lenient("raster product", RASTER_PRODUCTS, r.text()?).unwrap_or_default();

        let direction = r.text()?;
        let time = r.text()?;
        let light = if product == RasterProduct::Hillshade && (direction, time) != DEFAULT_LIGHT {
            Some((
                strict("light direction", LIGHT_DIRECTIONS, direction)?,
                strict("time of day", LIGHT_TIMES, time)?,
            ))
        } else {
            None
        };

        let min = r.optional()?;
        let max = r.optional()?;
        let min_max = match (min, max) {
            (Some(min), Some(max)) if product.takes_min_max() => {
                Some((normalize_decimal(min), normalize_decimal(max)))
            }
            _ => None,
        };

        Ok(Self {
            input,
            merged,
            step,
            kill,
            attribute,
            product,
            light,
            min_max,
            filter: lenient("raster filter", RASTER_FILTERS, r.text()?),
            use_tile_bb: r.flag()?,
            output: OutputTarget::read(r, RasterFormat::resolve)?,
            additional: read_additional(r)?,
        })
    }

    fn push_tokens(&self, cmd: &mut CommandLine) {
        self.input.push_tokens(cmd);
        if self.merged {
            cmd.flag("-merged");
        }
        if let Some(step) = &self.step {
            cmd.arg("-step", step.as_str());
        }
        if let Some(kill) = &self.kill {
            cmd.arg("-kill", kill.as_str());
        }
        if let Some(flag) = self.attribute.flag() {
            cmd.flag(flag);
        }
        if let Some(flag) = self.product.flag() {
            cmd.flag(flag);
        }
        if let Some((direction, time)) = self.light {
            let [dx, dy] = direction.vector();
            cmd.flag("-light").flag(dx).flag(dy).flag(time.elevation());
        }
        if let Some((min, max)) = &self.min_max {
            cmd.flag("-set_min_max").flag(min.as_str()).flag(max.as_str());
        }
        if let Some(filter) = self.filter {
            filter.push_tokens(cmd);
        }
        if self.use_tile_bb {
            cmd.flag("-use_tile_bb");
        }
        self.output.push_tokens(cmd);
        if let Some(additional) = &self.additional {
            cmd.split_words(additional);
        }
    }
}
