//! Chunks command implementation

use crate::input;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use fraza_core::{merge_short_chunks, split_paragraphs};
use std::path::PathBuf;

/// Arguments for the chunks command
#[derive(Debug, Args)]
pub struct ChunksArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Minimum chunk size in characters; shorter chunks merge into their
    /// predecessor
    #[arg(short, long, value_name = "N")]
    pub min_size: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChunksArgs {
    /// Execute the chunks command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let files = input::resolve_patterns(&self.input)?;
        log::info!(
            "chunking {} file(s) with min size {}",
            files.len(),
            self.min_size
        );

        let writer = output::open_writer(self.output.as_ref())?;
        let mut formatter = output::make_formatter(self.format, writer);

        for path in &files {
            let text = input::read_text(path)?;
            let paragraphs = split_paragraphs(&text);
            let chunks = merge_short_chunks(&paragraphs, self.min_size);
            log::debug!(
                "{}: {} paragraph(s) merged into {} chunk(s)",
                path.display(),
                paragraphs.len(),
                chunks.len()
            );

            formatter.begin_file(path)?;
            for chunk in &chunks {
                formatter.write_item(chunk)?;
            }
        }

        formatter.finish()
    }
}
