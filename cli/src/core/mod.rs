//! # Lasrun Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by every command:
//! - `config`: TOML configuration loading, merging, and validation
//! - `error`: the `LasrunError` enum and the `Result` alias
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{LasrunError, Result};
//! ```
//!
pub mod config;
pub mod error;
