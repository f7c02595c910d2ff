//! # Toolbox Choice Tables
//!
//! File: cli/src/common/lastools/choices.rs
//!
//! ## Overview
//!
//! Every drop-down in the toolbox dialogs arrives as its display label. Each
//! drop-down is a closed enum here, with a `const` table from label to variant
//! and an exhaustive `match` from variant to command-line tokens.
//!
//! Two lookup flavours exist:
//! - [`strict`]: an unknown label is an `InvalidParameter` error. Used for
//!   point formats and hillshade lighting, where guessing would change the output.
//! - [`lenient`]: an unknown label logs a warning and yields `None`. Used for
//!   drop-downs whose default entry emits no flag at all.
//!
use crate::common::process::CommandLine;
use crate::core::error::{LasrunError, Result};
use tracing::warn;

/// A label → variant table.
pub type Table<T> = &'static [(&'static str, T)];

fn lookup<T: Clone>(table: Table<T>, label: &str) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, value)| value.clone())
}

/// Looks up `label`, failing on anything the table does not list.
pub fn strict<T: Clone>(field: &'static str, table: Table<T>, label: &str) -> Result<T> {
    lookup(table, label).ok_or_else(|| {
        LasrunError::InvalidParameter {
            field,
            value: label.to_string(),
        }
        .into()
    })
}

/// Looks up `label`, wrapping any other single word with `other`.
///
/// Used for vector and raster outputs, where LAStools picks the writer from
/// the `-o<suffix>` flag itself.
pub fn forwarded<T: Clone>(table: Table<T>, label: &str, other: fn(String) -> T) -> Result<T> {
    if let Some(known) = lookup(table, label) {
        return Ok(known);
    }
    if label.is_empty() || label.contains(char::is_whitespace) {
        return Err(LasrunError::InvalidParameter {
            field: "output format",
            value: label.to_string(),
        }
        .into());
    }
    warn!("Forwarding unlisted output format '{}' as -o{}", label, label);
    Ok(other(label.to_string()))
}

/// Looks up `label`, treating anything unknown as "no choice".
pub fn lenient<T: Clone>(field: &'static str, table: Table<T>, label: &str) -> Option<T> {
    let found = lookup(table, label);
    if found.is_none() {
        warn!("Ignoring unrecognised {} '{}'", field, label);
    }
    found
}

// --- Point classification -------------------------------------------------

/// Which point classes a tool should keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFilter {
    Ground,
    GroundKeypoints,
    GroundBuildings,
    GroundVegetation,
    GroundObjects,
}

impl ClassFilter {
    /// The ASPRS class codes passed to `-keep_class`.
    pub fn class_codes(self) -> &'static [&'static str] {
        match self {
            ClassFilter::Ground => &["2"],
            ClassFilter::GroundKeypoints => &["2", "8"],
            ClassFilter::GroundBuildings => &["2", "6"],
            ClassFilter::GroundVegetation => &["2", "3", "4", "5"],
            ClassFilter::GroundObjects => &["2", "3", "4", "5", "6"],
        }
    }

    pub fn push_tokens(self, cmd: &mut CommandLine) {
        cmd.flag("-keep_class");
        for code in self.class_codes() {
            cmd.flag(*code);
        }
    }
}

/// Labels used by the contouring and triangulation dialogs. The contour dialog
/// says "only ground points", the others "ground points only".
pub const CLASS_FILTERS: Table<ClassFilter> = &[
    ("only ground points", ClassFilter::Ground),
    ("ground points only", ClassFilter::Ground),
    ("ground and keypoints", ClassFilter::GroundKeypoints),
    ("ground and buildings", ClassFilter::GroundBuildings),
    ("ground and vegetation", ClassFilter::GroundVegetation),
    ("ground and objects", ClassFilter::GroundObjects),
];

/// Point selection for rasterizing: a class filter or a return filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFilter {
    Classes(ClassFilter),
    LastReturn,
    FirstReturn,
}

impl RasterFilter {
    pub fn push_tokens(self, cmd: &mut CommandLine) {
        match self {
            RasterFilter::Classes(filter) => filter.push_tokens(cmd),
            RasterFilter::LastReturn => {
                cmd.flag("-last_only");
            }
            RasterFilter::FirstReturn => {
                cmd.flag("-first_only");
            }
        }
    }
}

pub const RASTER_FILTERS: Table<RasterFilter> = &[
    ("ground points only", RasterFilter::Classes(ClassFilter::Ground)),
    ("ground and keypoints", RasterFilter::Classes(ClassFilter::GroundKeypoints)),
    ("ground and buildings", RasterFilter::Classes(ClassFilter::GroundBuildings)),
    ("ground and vegetation", RasterFilter::Classes(ClassFilter::GroundVegetation)),
    ("ground and objects", RasterFilter::Classes(ClassFilter::GroundObjects)),
    ("last return only", RasterFilter::LastReturn),
    ("first return only", RasterFilter::FirstReturn),
];

// --- Contours -------------------------------------------------------------

/// How the amount field of the contour dialog is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoSpacing {
    /// A number of equally spaced contours (`-iso_number`).
    Count,
    /// One contour every x elevation units (`-iso_every`).
    Every,
    /// A single contour at the given value (`-iso_value`).
    Value,
}

pub const ISO_SPACINGS: Table<IsoSpacing> = &[
    ("a number of x equally spaced contours", IsoSpacing::Count),
    ("a contour every x elevation units", IsoSpacing::Every),
    ("the contour with the iso-value x", IsoSpacing::Value),
];

// --- Thinning -------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThinKeep {
    #[default]
    Lowest,
    Highest,
    Random,
}

impl ThinKeep {
    pub fn flag(self) -> Option<&'static str> {
        match self {
            ThinKeep::Lowest => None,
            ThinKeep::Highest => Some("-highest"),
            ThinKeep::Random => Some("-random"),
        }
    }
}

pub const THIN_KEEPS: Table<ThinKeep> = &[
    ("lowest", ThinKeep::Lowest),
    ("highest", ThinKeep::Highest),
    ("random", ThinKeep::Random),
];

// --- Rasterizing ----------------------------------------------------------

/// The point attribute that becomes the raster value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterAttribute {
    #[default]
    Elevation,
    Slope,
    Intensity,
    Rgb,
}

impl RasterAttribute {
    pub fn flag(self) -> Option<&'static str> {
        match self {
            RasterAttribute::Elevation => None,
            RasterAttribute::Slope => Some("-slope"),
            RasterAttribute::Intensity => Some("-intensity"),
            RasterAttribute::Rgb => Some("-rgb"),
        }
    }
}

pub const RASTER_ATTRIBUTES: Table<RasterAttribute> = &[
    ("elevation", RasterAttribute::Elevation),
    ("slope", RasterAttribute::Slope),
    ("intensity", RasterAttribute::Intensity),
    ("rgb", RasterAttribute::Rgb),
];

/// How raster values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterProduct {
    #[default]
    ActualValues,
    Hillshade,
    GrayRamp,
    FalseColors,
}

impl RasterProduct {
    pub fn flag(self) -> Option<&'static str> {
        match self {
            RasterProduct::ActualValues => None,
            RasterProduct::Hillshade => Some("-hillshade"),
            RasterProduct::GrayRamp => Some("-gray"),
            RasterProduct::FalseColors => Some("-false"),
        }
    }

    /// Color ramps accept an explicit value range.
    pub fn takes_min_max(self) -> bool {
        matches!(self, RasterProduct::GrayRamp | RasterProduct::FalseColors)
    }
}

pub const RASTER_PRODUCTS: Table<RasterProduct> = &[
    ("actual values", RasterProduct::ActualValues),
    ("hillshade", RasterProduct::Hillshade),
    ("gray ramp", RasterProduct::GrayRamp),
    ("false colors", RasterProduct::FalseColors),
];

/// Where the hillshade light comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    SouthEast,
    NorthWest,
    SouthWest,
}

impl LightDirection {
    /// Horizontal components of the `-light` vector.
    pub fn vector(self) -> [&'static str; 2] {
        match self {
            LightDirection::North => ["0", "1.41421"],
            LightDirection::South => ["0", "-1.41421"],
            LightDirection::East => ["1.41421", "0"],
            LightDirection::West => ["-1.41421", "0"],
            LightDirection::NorthEast => ["1", "1"],
            LightDirection::SouthEast => ["1", "-1"],
            LightDirection::NorthWest => ["-1", "1"],
            LightDirection::SouthWest => ["-1", "-1"],
        }
    }
}

pub const LIGHT_DIRECTIONS: Table<LightDirection> = &[
    ("north", LightDirection::North),
    ("south", LightDirection::South),
    ("east", LightDirection::East),
    ("west", LightDirection::West),
    ("north east", LightDirection::NorthEast),
    ("south east", LightDirection::SouthEast),
    ("north west", LightDirection::NorthWest),
    ("south west", LightDirection::SouthWest),
];

/// Sun elevation for the hillshade, expressed as a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightTime {
    Noon,
    OnePm,
    ThreePm,
    SixPm,
    NinePm,
}

impl LightTime {
    /// Vertical component of the `-light` vector.
    pub fn elevation(self) -> &'static str {
        match self {
            LightTime::Noon => "100",
            LightTime::OnePm => "2",
            LightTime::ThreePm => "1",
            LightTime::SixPm => "0.5",
            LightTime::NinePm => "0.1",
        }
    }
}

pub const LIGHT_TIMES: Table<LightTime> = &[
    ("noon", LightTime::Noon),
    ("1 pm", LightTime::OnePm),
    ("3 pm", LightTime::ThreePm),
    ("6 pm", LightTime::SixPm),
    ("9 pm", LightTime::NinePm),
];

// --- Output formats -------------------------------------------------------

/// Output format flags appended to a command line.
pub trait OutputFormat {
    fn push_tokens(&self, cmd: &mut CommandLine);
}

/// Point cloud output, optionally as text with a field layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    Las,
    Laz,
    Bin,
    Text { parse: Option<&'static str> },
}

impl OutputFormat for PointFormat {
    fn push_tokens(&self, cmd: &mut CommandLine) {
        match *self {
            PointFormat::Las => {
                cmd.flag("-olas");
            }
            PointFormat::Laz => {
                cmd.flag("-olaz");
            }
            PointFormat::Bin => {
                cmd.flag("-obin");
            }
            PointFormat::Text { parse } => {
                cmd.flag("-otxt");
                if let Some(fields) = parse {
                    cmd.arg("-oparse", fields);
                }
            }
        }
    }
}

pub const THIN_FORMATS: Table<PointFormat> = &[
    ("las", PointFormat::Las),
    ("laz", PointFormat::Laz),
    ("bin", PointFormat::Bin),
    ("xyz", PointFormat::Text { parse: None }),
    ("xyzi", PointFormat::Text { parse: Some("xyzi") }),
    ("txyzi", PointFormat::Text { parse: Some("txyzi") }),
];

pub const GROUND_FORMATS: Table<PointFormat> = &[
    ("las", PointFormat::Las),
    ("laz", PointFormat::Laz),
    ("bin", PointFormat::Bin),
    ("xyzc", PointFormat::Text { parse: Some("xyzc") }),
    ("xyzci", PointFormat::Text { parse: Some("xyzci") }),
    ("txyzc", PointFormat::Text { parse: Some("txyzc") }),
    ("txyzci", PointFormat::Text { parse: Some("txyzci") }),
];

pub const POLY_FORMATS: Table<PointFormat> = &[
    ("las", PointFormat::Las),
    ("laz", PointFormat::Laz),
    ("bin", PointFormat::Bin),
    ("txt", PointFormat::Text { parse: None }),
    ("xyzi", PointFormat::Text { parse: Some("xyzi") }),
    ("txyzi", PointFormat::Text { parse: Some("txyzi") }),
];

/// Vector output of contours and TINs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorFormat {
    Shp,
    Wkt,
    Kml,
    Txt,
    Obj,
    Other(String),
}

impl VectorFormat {
    /// Looks `label` up in `table`, forwarding any other single word.
    pub fn resolve(table: Table<VectorFormat>, label: &str) -> Result<Self> {
        forwarded(table, label, VectorFormat::Other)
    }
}

impl OutputFormat for VectorFormat {
    fn push_tokens(&self, cmd: &mut CommandLine) {
        match self {
            VectorFormat::Shp => cmd.flag("-oshp"),
            VectorFormat::Wkt => cmd.flag("-owkt"),
            VectorFormat::Kml => cmd.flag("-okml"),
            VectorFormat::Txt => cmd.flag("-otxt"),
            VectorFormat::Obj => cmd.flag("-oobj"),
            VectorFormat::Other(suffix) => cmd.flag(format!("-o{}", suffix)),
        };
    }
}

pub const CONTOUR_FORMATS: Table<VectorFormat> = &[
    ("shp", VectorFormat::Shp),
    ("wkt", VectorFormat::Wkt),
    ("kml", VectorFormat::Kml),
    ("txt", VectorFormat::Txt),
];

pub const TIN_FORMATS: Table<VectorFormat> = &[
    ("shp", VectorFormat::Shp),
    ("obj", VectorFormat::Obj),
    ("txt", VectorFormat::Txt),
];

/// Raster output of blast2dem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterFormat {
    Bil,
    Asc,
    Img,
    Tif,
    Dtm,
    Png,
    Jpg,
    Other(String),
}

impl RasterFormat {
    /// Looks `label` up in [`RASTER_FORMATS`], forwarding any other single word.
    pub fn resolve(label: &str) -> Result<Self> {
        forwarded(RASTER_FORMATS, label, RasterFormat::Other)
    }
}

impl OutputFormat for RasterFormat {
    fn push_tokens(&self, cmd: &mut CommandLine) {
        match self {
            RasterFormat::Bil => cmd.flag("-obil"),
            RasterFormat::Asc => cmd.flag("-oasc"),
            RasterFormat::Img => cmd.flag("-oimg"),
            RasterFormat::Tif => cmd.flag("-otif"),
            RasterFormat::Dtm => cmd.flag("-odtm"),
            RasterFormat::Png => cmd.flag("-opng"),
            RasterFormat::Jpg => cmd.flag("-ojpg"),
            RasterFormat::Other(suffix) => cmd.flag(format!("-o{}", suffix)),
        };
    }
}

pub const RASTER_FORMATS: Table<RasterFormat> = &[
    ("bil", RasterFormat::Bil),
    ("asc", RasterFormat::Asc),
    ("img", RasterFormat::Img),
    ("tif", RasterFormat::Tif),
    ("dtm", RasterFormat::Dtm),
    ("png", RasterFormat::Png),
    ("jpg", RasterFormat::Jpg),
];
