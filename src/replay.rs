use anyhow::{Context, Result};

use crate::cli::ReplayArgs;
use crate::events;
use crate::reporter::{BambooReporter, ReporterOptions};

/// Feed a recorded event log through a fresh reporter.
pub fn replay(args: ReplayArgs) -> Result<()> {
    let events = events::read_event_log(&args.events).context("failed to load event log")?;
    let mut reporter = BambooReporter::new(ReporterOptions {
        report_path: args.report,
    });
    reporter.listen(events);
    Ok(())
}
