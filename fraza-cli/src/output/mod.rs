//! Output formatting module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output formats supported by the CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence or chunk per line
    Text,
    /// JSON array of per-file documents with item metadata
    Json,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Begin a new input document
    fn begin_file(&mut self, path: &Path) -> Result<()>;

    /// Emit one text unit (a sentence or a chunk)
    fn write_item(&mut self, item: &str) -> Result<()>;

    /// Finalize output (e.g. close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for `format` writing to `writer`.
pub fn make_formatter(
    format: OutputFormat,
    writer: Box<dyn Write>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}

/// Open the destination writer: a file when `output` is given, stdout
/// otherwise.
pub fn open_writer(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
