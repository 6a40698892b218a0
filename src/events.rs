use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lifecycle event emitted by the test runner.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RunnerEvent {
    /// A run is starting.
    Begin,
    /// A test state finished; routed to capture or error by `equal`.
    EndTest(TestResult),
    /// A screenshot matched its reference image.
    Capture(TestResult),
    /// A test failed or the comparison errored.
    Error(TestResult),
    /// Non-fatal warning for a test state.
    Warning(TestResult),
    /// A test state was skipped.
    SkipState(TestResult),
    /// Free-form message passed through to stdout.
    Info { message: String },
    /// The run finished.
    End,
}

/// Per-test payload carried by end-test, capture, error, warning and
/// skip-state events. The runner is trusted to fill this in; no shape
/// validation happens downstream.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Whether the captured screenshot equals the reference.
    #[serde(default)]
    pub equal: bool,
    /// Test state; absent states get a placeholder title.
    pub state: Option<TestState>,
    /// Suite the state belongs to.
    pub suite: SuiteInfo,
    /// Browser configuration the state executed under.
    pub browser_id: String,
    /// Error or warning message, when the event carries one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Named test state within a suite.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TestState {
    pub name: String,
}

/// Suite identity: its own name plus the full nesting path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SuiteInfo {
    pub name: String,
    /// Ordered nesting path, outermost suite first.
    pub path: Vec<String>,
}

/// Error reading or decoding an NDJSON event log.
#[derive(Debug, thiserror::Error)]
pub enum EventLogError {
    #[error("failed to read event log {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid event on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a recorded event log (one JSON event per line, blank lines skipped).
pub fn read_event_log(path: &Path) -> Result<Vec<RunnerEvent>, EventLogError> {
    let content = std::fs::read_to_string(path).map_err(|source| EventLogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| EventLogError::Parse {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Generate JSON Schema for the event-log line format.
pub fn generate_schema() -> String {
    let schema = schemars::schema_for!(RunnerEvent);
    serde_json::to_string_pretty(&schema).expect("failed to serialize schema")
}
