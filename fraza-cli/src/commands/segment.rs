//! Segment command implementation

use crate::input;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use fraza_core::{AbbreviationSet, Segmenter};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Abbreviation list, one entry per line (defaults to the bundled
    /// Russian list)
    #[arg(short, long, value_name = "FILE")]
    pub abbreviations: Option<PathBuf>,

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

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let abbreviations = match &self.abbreviations {
            Some(path) => AbbreviationSet::from_path(path).with_context(|| {
                format!("failed to load abbreviations from {}", path.display())
            })?,
            None => AbbreviationSet::bundled_ru(),
        };
        log::info!("using {} abbreviations", abbreviations.len());
        let segmenter = Segmenter::new(abbreviations);

        let files = input::resolve_patterns(&self.input)?;
        log::info!("segmenting {} file(s)", files.len());

        let writer = output::open_writer(self.output.as_ref())?;
        let mut formatter = output::make_formatter(self.format, writer);

        for path in &files {
            let text = input::read_text(path)?;
            let sentences = segmenter
                .detect_sentences(&text)
                .with_context(|| format!("failed to segment {}", path.display()))?;
            log::debug!("{}: {} sentence(s)", path.display(), sentences.len());

            formatter.begin_file(path)?;
            for sentence in &sentences {
                formatter.write_item(sentence)?;
            }
        }

        formatter.finish()
    }
}
