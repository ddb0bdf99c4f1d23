//! Command-line argument surface (§6): one or more scenario paths,
//! pretty-printing, and the outer-batch `--jobs` convenience of §5.

use std::path::PathBuf;

use clap::Parser;

/// Compute bounded infinite-chess endgame metrics for one or more scenario files.
#[derive(Debug, Parser)]
#[command(name = "boundchess", version, about)]
pub struct Cli {
    /// Scenario JSON files to evaluate.
    #[arg(required = true)]
    pub scenarios: Vec<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Evaluate scenarios concurrently across up to this many OS threads.
    /// Output order always follows input order regardless of this value.
    #[arg(long, default_value_t = 1)]
    pub jobs: usize,
}
