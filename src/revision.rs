//! Revisions and revision-range resolution.
//!
//! A range `(start, end]` is listed with `git log` (newest first) and then
//! reversed, so validation walks history forward, oldest first.

use crate::error::{CheckError, Result};
use crate::git;
use crate::invoke::CommandRunner;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Hash, one whitespace character, then the summary (possibly empty).
static LOG_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s(.*)$").expect("Invalid log line regex"));

/// A single commit to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revision {
    /// Full commit hash.
    pub id: String,
    /// Subject line.
    pub summary: String,
}

impl Revision {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
        }
    }

    /// Abbreviated hash for display.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(12)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}

/// Start (exclusive) and end (inclusive) references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    pub start: String,
    pub end: String,
}

impl RevisionRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Parse `git log --pretty=format:"%H %s"` output, preserving line order.
///
/// Lines that do not match `<hash><space><summary>` are dropped.
pub fn parse_log(stdout: &str) -> Vec<Revision> {
    stdout
        .lines()
        .filter_map(|line| {
            let caps = LOG_LINE_REGEX.captures(line)?;
            Some(Revision::new(&caps[1], &caps[2]))
        })
        .collect()
}

/// Resolve `range` into the ordered list of revisions to validate, oldest first.
///
/// An empty range is a valid, empty result.
///
/// # Returns
///
/// * `Ok(Vec<Revision>)` - Revisions in validation order
/// * `Err(CheckError::RangeResolution)` - If `git log` exits non-zero (bad refs)
/// * `Err(CheckError::Launch)` - If git cannot be started
pub fn resolve_range(runner: &dyn CommandRunner, range: &RevisionRange) -> Result<Vec<Revision>> {
    let output = runner.run(&git::log_range(&range.start, &range.end))?;

    if !output.success() {
        return Err(CheckError::RangeResolution {
            start: range.start.clone(),
            end: range.end.clone(),
            message: output.combined(),
        });
    }

    let mut revisions = parse_log(&output.stdout);
    revisions.reverse();

    tracing::debug!(
        start = %range.start,
        end = %range.end,
        count = revisions.len(),
        "resolved revision range"
    );

    Ok(revisions)
}
