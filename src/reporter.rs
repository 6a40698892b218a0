use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::console;
use crate::events::{RunnerEvent, TestResult};
use crate::model::{self, RunResults, RunStats, TestOutcome};

/// Options accepted when constructing a reporter.
#[derive(Debug, Clone, Default)]
pub struct ReporterOptions {
    /// Where to write the JSON report; defaults to [`model::REPORT_FILE`]
    /// in the working directory.
    pub report_path: Option<PathBuf>,
}

/// Aggregates runner lifecycle events into pass/failure/skip buckets and
/// produces the Bamboo-compatible JSON report at end-of-run.
///
/// One instance owns the state of one run. Handlers are synchronous and the
/// runner is expected to deliver events one at a time; the reporter is a
/// plain reducer and enforces no ordering beyond what it is fed.
pub struct BambooReporter {
    options: ReporterOptions,
    start_time: DateTime<Utc>,
    // Rolling reference for per-test durations; advanced on every outcome.
    last_test_time: DateTime<Utc>,
    suites: BTreeSet<String>,
    passes: Vec<TestOutcome>,
    failures: Vec<TestOutcome>,
    skipped: Vec<TestOutcome>,
    completed: Option<RunResults>,
}

impl BambooReporter {
    pub fn new(options: ReporterOptions) -> Self {
        let now = Utc::now();
        Self {
            options,
            start_time: now,
            last_test_time: now,
            suites: BTreeSet::new(),
            passes: Vec::new(),
            failures: Vec::new(),
            skipped: Vec::new(),
            completed: None,
        }
    }

    /// Dispatch a single runner event to its handler.
    pub fn handle(&mut self, event: RunnerEvent) {
        match event {
            RunnerEvent::Begin => self.on_begin(),
            RunnerEvent::EndTest(result) => self.on_end_test(result),
            RunnerEvent::Capture(result) => self.on_capture(result),
            RunnerEvent::Error(result) => self.on_error(result),
            // warning and skip-state land in the same bucket
            RunnerEvent::Warning(result) | RunnerEvent::SkipState(result) => {
                self.on_warning(result)
            }
            RunnerEvent::Info { message } => self.on_info(&message),
            RunnerEvent::End => self.on_end(),
        }
    }

    /// Drain an event stream through the reporter. Works over any event
    /// iterator, including `std::sync::mpsc::Receiver`.
    pub fn listen<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = RunnerEvent>,
    {
        for event in events {
            self.handle(event);
        }
    }

    /// The finished report, available once the end event has been handled.
    pub fn results(&self) -> Option<&RunResults> {
        self.completed.as_ref()
    }

    fn report_path(&self) -> &Path {
        self.options
            .report_path
            .as_deref()
            .unwrap_or(Path::new(model::REPORT_FILE))
    }

    fn on_begin(&mut self) {
        let now = Utc::now();
        self.start_time = now;
        self.last_test_time = now;
        self.suites.clear();
        self.passes.clear();
        self.failures.clear();
        self.skipped.clear();
        self.completed = None;
    }

    fn on_end_test(&mut self, result: TestResult) {
        if result.equal {
            self.on_capture(result);
        } else {
            self.on_error(result);
        }
    }

    fn on_capture(&mut self, result: TestResult) {
        let outcome = self.create_outcome(&result);
        self.passes.push(outcome);
    }

    fn on_error(&mut self, result: TestResult) {
        let mut outcome = self.create_outcome(&result);
        outcome.error = result.message;
        self.failures.push(outcome);
    }

    fn on_warning(&mut self, result: TestResult) {
        let mut outcome = self.create_outcome(&result);
        outcome.warning = result.message;
        self.skipped.push(outcome);
    }

    fn on_info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn on_end(&mut self) {
        console::print_run_summary(self.passes.len(), self.failures.len(), self.skipped.len());

        let end_time = Utc::now();
        let total = self.passes.len() + self.failures.len() + self.skipped.len();
        let stats = RunStats {
            suites: self.suites.len(),
            tests: total,
            passes: self.passes.len(),
            pending: self.skipped.len(),
            failures: self.failures.len(),
            start: iso_millis(self.start_time),
            end: iso_millis(end_time),
            duration: round_secs(end_time - self.start_time),
        };
        let results = RunResults {
            stats,
            passes: std::mem::take(&mut self.passes),
            failures: std::mem::take(&mut self.failures),
            skipped: std::mem::take(&mut self.skipped),
        };

        if let Err(err) = model::write_report(self.report_path(), &results) {
            tracing::warn!(
                path = %self.report_path().display(),
                error = %err,
                "failed to write run report"
            );
        }
        self.completed = Some(results);
    }

    fn create_outcome(&mut self, result: &TestResult) -> TestOutcome {
        self.suites.insert(result.suite.name.clone());
        let title = result
            .state
            .as_ref()
            .map(|state| state.name.clone())
            .unwrap_or_else(|| "unknown".to_string());
        TestOutcome {
            title,
            full_title: result.suite.path.join(" "),
            browser_id: result.browser_id.clone(),
            duration: self.take_duration(),
            error: None,
            warning: None,
        }
    }

    // Whole seconds since the previous outcome; advances the reference.
    fn take_duration(&mut self) -> i64 {
        let now = Utc::now();
        let duration = round_secs(now - self.last_test_time);
        self.last_test_time = now;
        duration
    }
}

impl Default for BambooReporter {
    fn default() -> Self {
        Self::new(ReporterOptions::default())
    }
}

fn iso_millis(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// Half-up rounding of milliseconds, like JS Math.round on a seconds delta.
fn round_secs(delta: chrono::Duration) -> i64 {
    (delta.num_milliseconds() as f64 / 1000.0).round() as i64
}
