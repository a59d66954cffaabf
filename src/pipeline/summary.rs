//! In-memory record of a validation run.

use crate::invoke::CheckOutcome;
use crate::revision::Revision;
use serde::Serialize;

/// Outcomes for one revision, in the order the checks ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionReport {
    #[serde(flatten)]
    pub revision: Revision,
    pub outcomes: Vec<CheckOutcome>,
}

impl RevisionReport {
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            outcomes: Vec::new(),
        }
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

/// The check that stopped a run under the exit-on-error policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbortPoint {
    pub revision: String,
    pub check: String,
}

/// Ordered record of every revision processed and its check outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub revisions: Vec<RevisionReport>,
    /// Set when a failing check stopped the run early.
    pub aborted: Option<AbortPoint>,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    pub fn check_count(&self) -> usize {
        self.revisions.iter().map(|r| r.outcomes.len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.revisions.iter().map(RevisionReport::failed_count).sum()
    }

    /// Every failing outcome with the revision it belongs to.
    pub fn failures(&self) -> impl Iterator<Item = (&Revision, &CheckOutcome)> {
        self.revisions.iter().flat_map(|r| {
            r.outcomes
                .iter()
                .filter(|o| !o.passed)
                .map(move |o| (&r.revision, o))
        })
    }
}
