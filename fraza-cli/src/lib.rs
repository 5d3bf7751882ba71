//! Fraza CLI library
//!
//! This library provides the command-line interface over the fraza
//! sentence segmentation and chunk merging pipeline.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
