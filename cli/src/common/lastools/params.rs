//! # Toolbox Parameter Vectors
//!
//! File: cli/src/common/lastools/params.rs
//!
//! ## Overview
//!
//! A toolbox host passes its parameters as a fixed-length list of strings.
//! Meaning comes from position alone; `#` marks an optional field that was left
//! empty and booleans arrive as `"true"`/`"false"`. The last two entries are
//! always the "use the old 32-bit executable" switch and the verbose switch.
//!
//! `ParamReader` checks the length once, splits off those two trailing switches
//! into an `Invocation`, and then hands out the remaining fields in order.
//!
use super::install::Bitness;
use crate::core::error::{LasrunError, Result};

/// Marks an optional parameter that was not set.
pub const SENTINEL: &str = "#";

/// Turns a locale-formatted decimal such as `12,5` into `12.5`.
pub fn normalize_decimal(value: &str) -> String {
    value.replace(',', ".")
}

/// The two trailing switches every parameter vector carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub bitness: Bitness,
    pub verbose: bool,
}

/// Sequential reader over a validated parameter vector.
#[derive(Debug)]
pub struct ParamReader<'a> {
    tool: &'static str,
    fields: &'a [String],
    pos: usize,
}

impl<'a> ParamReader<'a> {
    /// Validates that `params` holds `fields` tool fields plus the two trailing switches.
    pub fn new(tool: &'static str, params: &'a [String], fields: usize) -> Result<(Self, Invocation)> {
        let expected = fields + 2;
        if params.len() != expected {
            anyhow::bail!(LasrunError::ParameterCount {
                tool,
                expected,
                found: params.len(),
            });
        }
        let invocation = Invocation {
            bitness: if params[fields] == "true" {
                Bitness::Bit32
            } else {
                Bitness::Bit64
            },
            verbose: params[fields + 1] == "true",
        };
        Ok((
            Self {
                tool,
                fields: &params[..fields],
                pos: 0,
            },
            invocation,
        ))
    }

    /// Next field, verbatim.
    pub fn text(&mut self) -> Result<&'a str> {
        let value = self.fields.get(self.pos).ok_or_else(|| {
            LasrunError::ArgumentParsing(format!(
                "{} read past its {} parameters",
                self.tool,
                self.fields.len()
            ))
        })?;
        self.pos += 1;
        Ok(value.as_str())
    }

    /// Next field, `None` when it holds the sentinel.
    pub fn optional(&mut self) -> Result<Option<&'a str>> {
        Ok(Some(self.text()?).filter(|v| *v != SENTINEL))
    }

    /// Next field, `None` when it equals the value the executable already defaults to.
    pub fn unless(&mut self, default: &str) -> Result<Option<&'a str>> {
        Ok(Some(self.text()?).filter(|v| *v != default))
    }

    /// Next field as a checkbox.
    pub fn flag(&mut self) -> Result<bool> {
        Ok(self.text()? == "true")
    }

    /// Fails if a tool left fields unread, which means its schema is out of step.
    pub fn finish(self) -> Result<()> {
        if self.pos != self.fields.len() {
            anyhow::bail!(LasrunError::ArgumentParsing(format!(
                "{} consumed {} of {} parameters",
                self.tool,
                self.pos,
                self.fields.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_decimal() {
        assert_eq!(normalize_decimal("12,5"), "12.5");
        assert_eq!(normalize_decimal("0.25"), "0.25");
        assert_eq!(normalize_decimal("-1,41421"), "-1.41421");
    }

    #[test]
    fn test_reader_splits_trailing_switches() -> Result<()> {
        let params = strings(&["in.las", "#", "2,5", "true", "true", "true"]);
        let (mut reader, invocation) = ParamReader::new("test", &params, 4)?;
        assert_eq!(invocation.bitness, Bitness::Bit32);
        assert!(invocation.verbose);
        assert_eq!(reader.text()?, "in.las");
        assert_eq!(reader.optional()?, None);
        assert_eq!(reader.unless("1")?, Some("2,5"));
        assert!(reader.flag()?);
        reader.finish()
    }

    #[test]
    fn test_reader_defaults_to_64_bit() -> Result<()> {
        let params = strings(&["in.las", "false", "false"]);
        let (_, invocation) = ParamReader::new("test", &params, 1)?;
        assert_eq!(invocation.bitness, Bitness::Bit64);
        assert!(!invocation.verbose);
        Ok(())
    }

    #[test]
    fn test_reader_rejects_wrong_length() {
        let params = strings(&["in.las", "false"]);
        let err = ParamReader::new("lasthin", &params, 8).unwrap_err();
        assert_eq!(err.to_string(), "lasthin expects 10 parameters but received 2");
    }

    #[test]
    fn test_reader_cannot_read_switches_as_fields() -> Result<()> {
        let params = strings(&["in.las", "false", "false"]);
        let (mut reader, _) = ParamReader::new("test", &params, 1)?;
        reader.text()?;
        assert!(reader.text().is_err());
        Ok(())
    }

    #[test]
    fn test_finish_detects_unread_fields() -> Result<()> {
        let params = strings(&["a", "b", "false", "false"]);
        let (mut reader, _) = ParamReader::new("test", &params, 2)?;
        reader.text()?;
        assert!(reader.finish().is_err());
        Ok(())
    }
}
