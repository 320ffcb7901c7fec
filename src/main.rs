//! CLI entry point for the silhouette transform animation renderer

use clap::Parser;
use pixelmorph::io::cli::{Cli, RunProcessor};

fn main() -> pixelmorph::Result<()> {
    let cli = Cli::parse();
    let mut processor = RunProcessor::new(cli);
    processor.process()
}
