use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default report path, relative to the working directory. Downstream CI
/// report viewers look for this exact file name.
pub const REPORT_FILE: &str = "gemini-bamboo.json";

/// One recorded test outcome. Immutable once appended to a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    /// Test state name, or `"unknown"` when the event carried no state.
    pub title: String,
    /// Suite path joined with single spaces.
    pub full_title: String,
    /// Browser configuration the test executed under.
    #[serde(rename = "browserID")]
    pub browser_id: String,
    /// Whole seconds since the previous recorded outcome.
    pub duration: i64,
    /// Failure message; only present on records in the failures bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Warning message; only present on records in the skipped bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Run-level statistics, computed once at end-of-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Distinct suite names seen across all outcomes.
    pub suites: usize,
    /// Total outcomes; always the sum of the three bucket sizes.
    pub tests: usize,
    pub passes: usize,
    /// Bamboo reads skipped tests as pending.
    pub pending: usize,
    pub failures: usize,
    /// Run start, ISO-8601 with millisecond precision.
    pub start: String,
    /// Run end, same format.
    pub end: String,
    /// Whole seconds from start to end, rounded half-up.
    pub duration: i64,
}

/// The complete report written at end-of-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResults {
    pub stats: RunStats,
    pub passes: Vec<TestOutcome>,
    pub failures: Vec<TestOutcome>,
    pub skipped: Vec<TestOutcome>,
}

/// Write the report as pretty-printed JSON.
pub fn write_report(path: &Path, results: &RunResults) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a report back from disk.
pub fn load_report(path: &Path) -> Result<RunResults> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let results = serde_json::from_reader(reader)?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(title: &str) -> TestOutcome {
        TestOutcome {
            title: title.to_string(),
            full_title: format!("A {}", title),
            browser_id: "chrome".to_string(),
            duration: 0,
            error: None,
            warning: None,
        }
    }

    #[test]
    fn test_outcome_field_casing() {
        let value = serde_json::to_value(outcome("t1")).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("fullTitle"));
        assert!(obj.contains_key("browserID"));
        assert!(obj.contains_key("duration"));
    }

    #[test]
    fn test_absent_messages_are_omitted() {
        let value = serde_json::to_value(outcome("t1")).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("error"));
        assert!(!obj.contains_key("warning"));

        let mut failed = outcome("t2");
        failed.error = Some("boom".to_string());
        let value = serde_json::to_value(failed).unwrap();
        assert_eq!(value["error"], "boom");
    }

    #[test]
    fn test_report_nesting() {
        let results = RunResults {
            stats: RunStats {
                suites: 1,
                tests: 1,
                passes: 1,
                pending: 0,
                failures: 0,
                start: "2026-08-23T00:00:00.000Z".to_string(),
                end: "2026-08-23T00:00:01.000Z".to_string(),
                duration: 1,
            },
            passes: vec![outcome("t1")],
            failures: vec![],
            skipped: vec![],
        };
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["stats"]["tests"], 1);
        assert_eq!(value["passes"][0]["fullTitle"], "A t1");
        assert!(value["failures"].as_array().unwrap().is_empty());
        assert!(value["skipped"].as_array().unwrap().is_empty());
    }
}
