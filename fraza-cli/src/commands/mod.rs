//! CLI command implementations

use clap::Subcommand;

pub mod chunks;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split article text files into sentences
    Segment(segment::SegmentArgs),

    /// Split article text files into paragraph chunks and merge short ones
    Chunks(chunks::ChunksArgs),
}

/// Initialize logging from the shared verbosity flags.
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}
