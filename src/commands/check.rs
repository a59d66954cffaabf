//! Implementation of the range validation command.
//!
//! # Steps
//!
//! 1. Verify the repository directory
//! 2. Load config and overlay CLI options
//! 3. Resolve the checkpatch location once
//! 4. Run the pipeline over the range, printing progress
//! 5. Print the summary (text or JSON)
//! 6. Map an exit-on-error stop to [`CheckError::Aborted`]

use crate::cli::Cli;
use crate::config::{Config, resolve_checkpatch_path};
use crate::error::{CheckError, Result};
use crate::git;
use crate::invoke::{CommandRunner, SystemRunner};
use crate::pipeline::{Pipeline, RunSummary};
use crate::progress::{ConsoleProgress, Progress};
use crate::report;
use crate::revision::RevisionRange;
use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};

/// Validate `start_ref..end_ref` in the repository named on the command line.
pub fn cmd_check(cli: &Cli) -> Result<()> {
    let repo_dir = require_directory(&cli.repo_dir)?;

    let mut config = Config::load_for_repo(&repo_dir, cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate()?;

    let runner = SystemRunner::new(&repo_dir);

    // JSON owns stdout, so progress moves to stderr.
    let mut progress: Box<dyn Progress> = if cli.json {
        Box::new(ConsoleProgress::new(io::stderr(), io::stderr()))
    } else {
        Box::new(ConsoleProgress::stdio())
    };

    let range = RevisionRange::new(&cli.start_ref, &cli.end_ref);
    let summary = run_range(&runner, &config, &range, progress.as_mut())?;

    if cli.json {
        println!("{}", report::render_json(&summary, Utc::now())?);
    } else {
        print!("{}", report::format_text_summary(&summary));
    }

    match summary.aborted {
        Some(abort) => Err(CheckError::Aborted {
            stage: abort.check,
            revision: abort.revision,
        }),
        None => Ok(()),
    }
}

/// Run the pipeline for `range` with settings derived from `config`.
pub fn run_range(
    runner: &dyn CommandRunner,
    config: &Config,
    range: &RevisionRange,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    git::repo_root(runner)?;

    let checkpatch_path = resolve_checkpatch_path(config);
    tracing::debug!(path = %checkpatch_path, "using checkpatch");

    let policy = config.pipeline_policy();
    let settings = config.stage_settings(checkpatch_path);

    Pipeline::new(runner, &policy, &settings, progress).execute(range)
}

fn require_directory(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(CheckError::UserError(format!(
            "repository directory '{}' does not exist",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(CheckError::UserError(format!(
            "repository directory '{}' is not a directory",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}
