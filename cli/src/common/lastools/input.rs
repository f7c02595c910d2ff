//! # Folder Input
//!
//! File: cli/src/common/lastools/input.rs
//!
//! The production dialogs take a folder and a whitespace separated list of
//! wildcards. Every wildcard becomes its own `-i <folder>/<wildcard>`.
//!
use super::params::ParamReader;
use crate::common::process::CommandLine;
use crate::core::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderInput {
    pub folder: String,
    pub wildcards: Vec<String>,
}

impl FolderInput {
    pub fn read(reader: &mut ParamReader<'_>) -> Result<Self> {
        let folder = reader.text()?.to_string();
        let wildcards = reader
            .text()?
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Ok(Self { folder, wildcards })
    }

    pub fn push_tokens(&self, cmd: &mut CommandLine) {
        for wildcard in &self.wildcards {
            let pattern = Path::new(&self.folder).join(wildcard);
            cmd.path_arg("-i", pattern.to_string_lossy());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_input_per_wildcard() -> Result<()> {
        let params: Vec<String> = ["/data/tiles", "*.las  *.laz", "false", "false"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (mut reader, _) = ParamReader::new("test", &params, 2)?;
        let input = FolderInput::read(&mut reader)?;
        assert_eq!(input.wildcards, vec!["*.las", "*.laz"]);

        let mut cmd = CommandLine::new("blast2dem64");
        input.push_tokens(&mut cmd);
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            cmd.args().collect::<Vec<_>>(),
            vec![
                "-i".to_string(),
                format!("/data/tiles{}*.las", sep),
                "-i".to_string(),
                format!("/data/tiles{}*.laz", sep),
            ]
        );
        Ok(())
    }
}
