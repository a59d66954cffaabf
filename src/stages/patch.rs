//! Patch style check.
//!
//! The HEAD commit is exported with `git format-patch` into a fresh scratch
//! directory and the style checker is run against that file. The scratch
//! directory is removed on every exit path; finding it already gone is fine,
//! any other removal failure is an error.

use super::PATCH_CHECK;
use crate::error::{CheckError, Result};
use crate::git;
use crate::invoke::{CheckOutcome, CommandRunner, CommandSpec, run_check};
use crate::progress::Progress;
use std::io::ErrorKind;
use std::path::Path;
use tempfile::TempDir;

/// Where the patch checker lives and how it finds its backing script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchCheckSettings {
    /// Patch style checker wrapper script, relative to the repository.
    pub script: String,
    /// Environment variable the wrapper reads to locate the backing script.
    pub env_var: String,
    /// Value passed in `env_var`.
    pub checkpatch_path: String,
}

impl PatchCheckSettings {
    /// `<script> <patch-file>` with the backing-script variable set.
    pub fn command(&self, patch_file: &str) -> CommandSpec {
        CommandSpec::new(&self.script)
            .arg(patch_file)
            .env(&self.env_var, &self.checkpatch_path)
    }
}

/// Run the patch style check against the currently checked-out commit.
///
/// A failing `git format-patch` is recorded as a failed check. The outcome is
/// reported to `progress` before any scratch removal error is returned. Launch
/// failures and scratch directory errors are returned as errors, after cleanup.
pub fn run_patch_check(
    runner: &dyn CommandRunner,
    settings: &PatchCheckSettings,
    progress: &mut dyn Progress,
) -> Result<CheckOutcome> {
    let scratch = tempfile::Builder::new()
        .prefix("check-commits-")
        .tempdir()
        .map_err(|e| CheckError::Scratch {
            path: std::env::temp_dir(),
            message: format!("failed to create: {}", e),
        })?;
    tracing::debug!(path = %scratch.path().display(), "created patch scratch directory");

    let result = check_in_scratch(runner, settings, progress, scratch.path());
    let cleanup = remove_scratch(scratch);

    let outcome = result?;
    progress.check_finished(&outcome);
    cleanup?;
    Ok(outcome)
}

fn check_in_scratch(
    runner: &dyn CommandRunner,
    settings: &PatchCheckSettings,
    progress: &mut dyn Progress,
    scratch: &Path,
) -> Result<CheckOutcome> {
    let format_patch = git::format_patch(scratch);
    let generated = runner.run(&format_patch)?;

    if !generated.success() {
        progress.check_started(&format_patch);
        return Ok(CheckOutcome::from_output(PATCH_CHECK, &generated));
    }

    let Some(patch_file) = generated.stdout.lines().map(str::trim).rfind(|l| !l.is_empty()) else {
        progress.check_started(&format_patch);
        return Ok(CheckOutcome {
            name: PATCH_CHECK.to_string(),
            passed: false,
            output: "git format-patch did not report a patch file".to_string(),
        });
    };

    let check = settings.command(patch_file);
    progress.check_started(&check);
    run_check(runner, PATCH_CHECK, &check)
}

fn remove_scratch(scratch: TempDir) -> Result<()> {
    let path = scratch.path().to_path_buf();
    match scratch.close() {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed patch scratch directory");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "patch scratch directory already gone");
            Ok(())
        }
        Err(e) => Err(CheckError::Scratch {
            path,
            message: format!("failed to remove: {}", e),
        }),
    }
}
