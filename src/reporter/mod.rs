pub mod model;

use crate::configuration::command_line::OutputFormat;
use crate::reporter::model::{RunState, SuiteRunStatus};

/// Renders a status snapshot in the requested format. Purely a rendering
/// function; exit-code decisions live in `exit_code_for_run` and
/// `exit_code_for_status` so the entry point composes the two.
pub fn render(
    status: &SuiteRunStatus,
    format: OutputFormat,
    suite_run_id: Option<&str>,
) -> String {
    match format {
        OutputFormat::Json => render_json(status),
        OutputFormat::Github => render_github(status, suite_run_id),
        OutputFormat::Text => render_text(status),
    }
}

/// Exit-code rule for the `run` subcommand: only the failed-test count
/// matters, the top-level state does not.
pub fn exit_code_for_run(status: &SuiteRunStatus) -> i32 {
    if status.failed_tests > 0 {
        1
    } else {
        0
    }
}

/// Exit-code rule for the `status` subcommand: a `failed` state is fatal
/// even when no per-test breakdown was reported.
pub fn exit_code_for_status(status: &SuiteRunStatus) -> i32 {
    if status.status == RunState::Failed || status.failed_tests > 0 {
        1
    } else {
        0
    }
}

fn render_json(status: &SuiteRunStatus) -> String {
    serde_json::to_string_pretty(status).expect("Status snapshot is always serializable")
}

fn render_github(status: &SuiteRunStatus, suite_run_id: Option<&str>) -> String {
    let mut lines = Vec::new();
    if let Some(id) = suite_run_id {
        lines.push(format!("::set-output name=suite_run_id::{}", id));
    }
    lines.push(format!("::set-output name=status::{}", status.status));
    lines.push(format!(
        "::set-output name=passed_tests::{}",
        status.passed_tests
    ));
    lines.push(format!(
        "::set-output name=failed_tests::{}",
        status.failed_tests
    ));
    lines.push(format!(
        "::set-output name=total_tests::{}",
        status.total_tests
    ));
    lines.push(format!(
        "::set-output name=run_url::{}",
        status.run_url.as_deref().unwrap_or("")
    ));
    lines.push(String::new());
    if status.failed_tests > 0 {
        lines.push(format!(
            "❌ Tests failed: {} out of {}",
            status.failed_tests, status.total_tests
        ));
    } else {
        lines.push(format!("✅ All {} tests passed!", status.total_tests));
    }
    lines.join("\n")
}

fn render_text(status: &SuiteRunStatus) -> String {
    let mut lines = vec![
        String::new(),
        format!("Suite Run Status: {}", status.status),
        format!("Total Tests: {}", status.total_tests),
        format!("Passed: {}", status.passed_tests),
        format!("Failed: {}", status.failed_tests),
    ];
    if let Some(url) = &status.run_url {
        lines.push(String::new());
        lines.push(format!("View results: {}", url));
    }
    if let Some(tests) = &status.tests {
        if !tests.is_empty() {
            lines.push(String::new());
            lines.push("Test Results:".to_owned());
            lines.push("-".repeat(60));
            for test in tests {
                let icon = if test.status == "completed" { "✅" } else { "❌" };
                lines.push(format!(
                    "{} {}: {} ({}ms)",
                    icon, test.test_name, test.status, test.duration_ms
                ));
            }
        }
    }
    lines.join("\n")
}
