//! # Lasrun Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers shared by the commands. Import from the submodule
//! directly, e.g. `crate::common::fs::io::write_string_to_file`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_optional_file`, `write_string_to_file`).
pub mod io;
