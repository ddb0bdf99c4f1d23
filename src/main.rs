use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use boundchess_cli::Cli;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    Ok(boundchess_cli::run(cli))
}
