//! `gemini-bamboo` - Bamboo-compatible result aggregator for
//! visual-regression test runs.
//!
//! See `README.md` for user documentation and `DESIGN.md` for architecture.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gemini_bamboo::cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Schema => {
            let schema = gemini_bamboo::events::generate_schema();
            println!("{}", schema);
        }
        Command::Replay(args) => gemini_bamboo::replay::replay(args)?,
    }
    Ok(())
}
