use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Run status as reported by the server. The set is open: values this
/// client does not know about are preserved verbatim in `Other` and
/// treated as non-terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunState {
    Pending,
    Running,
    Completed,
    Failed,
    Aborted,
    Other(String),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::Failed | RunState::Aborted
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            RunState::Pending => "pending",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
            RunState::Aborted => "aborted",
            RunState::Other(value) => value,
        }
    }
}

impl From<String> for RunState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => RunState::Pending,
            "running" => RunState::Running,
            "completed" => RunState::Completed,
            "failed" => RunState::Failed,
            "aborted" => RunState::Aborted,
            _ => RunState::Other(value),
        }
    }
}

impl From<RunState> for String {
    fn from(state: RunState) -> Self {
        match state {
            RunState::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a suite run, re-fetched in full on every poll tick. The
/// client is a passive reporter: counts are rendered as received, without
/// cross-checking `passed + failed <= total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteRunStatus {
    pub status: RunState,
    #[serde(default)]
    pub total_tests: u64,
    #[serde(default)]
    pub passed_tests: u64,
    #[serde(default)]
    pub failed_tests: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<TestResult>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_name: String,
    pub status: String,
    pub duration_ms: u64,
}
