use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bamboo-compatible result aggregator for visual-regression test runs.
#[derive(Parser)]
#[command(name = "gemini-bamboo", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print JSON Schema for event-log lines.
    Schema,
    /// Replay a recorded runner event log through the reporter.
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Path to the event log (one JSON event per line).
    #[arg(long, required = true)]
    pub events: PathBuf,

    /// Write the JSON report to a specific path instead of gemini-bamboo.json.
    #[arg(long)]
    pub report: Option<PathBuf>,
}
