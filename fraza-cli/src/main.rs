//! Command-line front end for the fraza segmentation pipeline.

use clap::Parser;
use fraza_cli::commands::Commands;

/// Sentence segmentation and chunk merging for Russian news text
#[derive(Debug, Parser)]
#[command(name = "fraza", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Chunks(args) => args.execute(),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
