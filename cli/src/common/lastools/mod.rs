//! # LAStools Invocation Building Blocks (`common::lastools`)
//!
//! File: cli/src/common/lastools/mod.rs
//!
//! Shared pieces of every toolbox command:
//! - **`install`**: locating `<root>/bin/<tool>[64]` and the bitness switch.
//! - **`params`**: reading the positional parameter vector.
//! - **`choices`**: drop-down label tables and their flag tokens.
//! - **`input`**: the folder plus wildcards input of the production dialogs.
//! - **`output`**: the output file / directory / appendix block.
//! - **`outcome`**: classifying a finished run into success, warning or error.
//!

pub mod choices;
pub mod input;
pub mod install;
pub mod outcome;
pub mod output;
pub mod params;
