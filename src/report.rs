//! End-of-run summary rendering (text and JSON).

use crate::error::{CheckError, Result};
use crate::pipeline::RunSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    summary: &'a RunSummary,
}

/// Per-revision pass/fail counts followed by a total line.
pub fn format_text_summary(summary: &RunSummary) -> String {
    let mut text = String::from("\nSummary:\n");

    if summary.is_empty() {
        text.push_str("  no commits in range\n");
        return text;
    }

    for report in &summary.revisions {
        let _ = writeln!(
            text,
            "  [{}] {} {}: {} passed, {} failed",
            if report.all_passed() { "PASS" } else { "FAIL" },
            report.revision.short_id(),
            report.revision.summary,
            report.passed_count(),
            report.failed_count()
        );
    }

    let _ = writeln!(
        text,
        "Total: {} commits, {} checks, {} failed",
        summary.revisions.len(),
        summary.check_count(),
        summary.failed_count()
    );

    let mut failures = summary.failures().peekable();
    if failures.peek().is_some() {
        text.push_str("Failed checks:\n");
        for (revision, outcome) in failures {
            let _ = writeln!(text, "  {} {}", revision.short_id(), outcome.name);
        }
    }

    if let Some(abort) = &summary.aborted {
        let _ = writeln!(
            text,
            "Stopped after '{}' failed on {} (exit-on-error)",
            abort.check, abort.revision
        );
    }

    text
}

/// The run summary as pretty-printed JSON, stamped with `generated_at`.
pub fn render_json(summary: &RunSummary, generated_at: DateTime<Utc>) -> Result<String> {
    let report = JsonReport {
        generated_at,
        summary,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| CheckError::UserError(format!("failed to serialize run summary: {}", e)))
}
