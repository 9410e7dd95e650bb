//! Go release version domain
//!
//! # Modules
//!
//! - [`parse`]: extracts a version token from a source-archive link
//! - [`select`]: folds scanned candidates into the latest stable/unstable release
//! - [`types`]: `GoVersion`, release tags, channels, and their ordering

pub mod parse;
pub mod select;
pub mod types;
