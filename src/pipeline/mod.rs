//! The per-revision validation pipeline.
//!
//! For each revision in a resolved range, oldest first:
//!
//! 1. Check the revision out (fatal on failure)
//! 2. Commit-message style check (if enabled)
//! 3. One build per planned configuration (unless thoroughness is `skip`)
//! 4. Patch style check (if enabled)
//!
//! A failing check is recorded and the run continues, unless
//! [`PipelinePolicy::exit_on_error`] is set, in which case the whole run stops
//! right after that outcome is recorded and reported.

mod summary;


pub use summary::{AbortPoint, RevisionReport, RunSummary};

use crate::build::{self, BuildConfiguration, Thoroughness, ToolchainSet};
use crate::error::Result;
use crate::invoke::{CheckOutcome, CommandRunner, CommandSpec, run_check};
use crate::materialize;
use crate::progress::Progress;
use crate::revision::{Revision, RevisionRange, resolve_range};
use crate::stages::{
    MESSAGE_CHECK, StageSettings, build_check_name, message_check_command, run_patch_check,
};

/// Which stages run and how failures are treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePolicy {
    /// Stop the entire run at the first failing check.
    pub exit_on_error: bool,
    pub run_message_check: bool,
    pub run_patch_check: bool,
    pub toolchains: ToolchainSet,
    pub thoroughness: Thoroughness,
}

impl Default for PipelinePolicy {
    fn default() -> Self {
        Self {
            exit_on_error: false,
            run_message_check: true,
            run_patch_check: true,
            toolchains: ToolchainSet::default(),
            thoroughness: Thoroughness::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Abort(String),
}

/// Sequential validator over a range of revisions.
pub struct Pipeline<'a> {
    runner: &'a dyn CommandRunner,
    policy: &'a PipelinePolicy,
    settings: &'a StageSettings,
    progress: &'a mut dyn Progress,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        policy: &'a PipelinePolicy,
        settings: &'a StageSettings,
        progress: &'a mut dyn Progress,
    ) -> Self {
        Self {
            runner,
            policy,
            settings,
            progress,
        }
    }

    /// Resolve `range` and validate every revision in it.
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` - All revisions processed, or stopped early by the
    ///   exit-on-error policy (see [`RunSummary::aborted`])
    /// * `Err(CheckError::RangeResolution)` - The range could not be listed
    /// * `Err(CheckError::Checkout)` - A revision could not be checked out
    /// * `Err(CheckError::Launch)` - An external tool could not be started
    /// * `Err(CheckError::Scratch)` - Patch scratch storage could not be managed
    pub fn execute(&mut self, range: &RevisionRange) -> Result<RunSummary> {
        let revisions = resolve_range(self.runner, range)?;
        self.execute_revisions(&revisions)
    }

    /// Validate an already-resolved list of revisions, in the given order.
    pub fn execute_revisions(&mut self, revisions: &[Revision]) -> Result<RunSummary> {
        let builds = build::plan(&self.policy.toolchains, self.policy.thoroughness);
        tracing::debug!(
            revisions = revisions.len(),
            builds = builds.len(),
            thoroughness = %self.policy.thoroughness,
            exit_on_error = self.policy.exit_on_error,
            "starting validation run"
        );

        let mut summary = RunSummary::default();

        for (index, revision) in revisions.iter().enumerate() {
            self.progress.revision_started(index, revision);
            materialize::checkout(self.runner, revision)?;

            let mut report = RevisionReport::new(revision.clone());
            let flow = self.run_stages(&builds, &mut report)?;
            summary.revisions.push(report);

            if let Flow::Abort(check) = flow {
                tracing::debug!(revision = %revision.id, check = %check, "aborting run");
                summary.aborted = Some(AbortPoint {
                    revision: revision.id.clone(),
                    check,
                });
                break;
            }
        }

        Ok(summary)
    }

    fn run_stages(
        &mut self,
        builds: &[BuildConfiguration],
        report: &mut RevisionReport,
    ) -> Result<Flow> {
        if self.policy.run_message_check {
            let command = message_check_command(&self.settings.check_git_log_script);
            let outcome = self.run_external(MESSAGE_CHECK, &command)?;
            if let flow @ Flow::Abort(_) = self.record(report, outcome) {
                return Ok(flow);
            }
        }

        for config in builds {
            let name = build_check_name(&config.target(&self.settings.build));
            let command = build::build_command(config, &self.settings.build);
            let outcome = self.run_external(&name, &command)?;
            if let flow @ Flow::Abort(_) = self.record(report, outcome) {
                return Ok(flow);
            }
        }

        if self.policy.run_patch_check {
            let outcome = run_patch_check(self.runner, &self.settings.patch, &mut *self.progress)?;
            if let flow @ Flow::Abort(_) = self.record(report, outcome) {
                return Ok(flow);
            }
        }

        Ok(Flow::Continue)
    }

    fn run_external(&mut self, name: &str, command: &CommandSpec) -> Result<CheckOutcome> {
        self.progress.check_started(command);
        let outcome = run_check(self.runner, name, command)?;
        self.progress.check_finished(&outcome);
        Ok(outcome)
    }

    fn record(&self, report: &mut RevisionReport, outcome: CheckOutcome) -> Flow {
        let flow = if !outcome.passed && self.policy.exit_on_error {
            Flow::Abort(outcome.name.clone())
        } else {
            Flow::Continue
        };
        if !outcome.passed {
            tracing::debug!(check = %outcome.name, revision = %report.revision.id, "check failed");
        }
        report.outcomes.push(outcome);
        flow
    }
}
