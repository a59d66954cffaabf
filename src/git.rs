//! Git command builders for check-commits.
//!
//! All git operations are expressed as [`CommandSpec`] values and run through
//! a [`CommandRunner`], so tests can substitute a scripted fake.

use crate::error::{CheckError, Result};
use crate::invoke::{CommandRunner, CommandSpec};
use std::path::{Path, PathBuf};

/// Format used for range listing: full hash, one space, subject line.
pub const LOG_FORMAT: &str = "--pretty=format:%H %s";

fn git<I, S>(args: I) -> CommandSpec
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CommandSpec::new("git").args(args)
}

/// `git log` restricted to `(start, end]`, newest first.
pub fn log_range(start: &str, end: &str) -> CommandSpec {
    git(["log".to_string(), LOG_FORMAT.to_string(), format!("{}..{}", start, end)])
}

/// `git checkout <id>`.
pub fn checkout(id: &str) -> CommandSpec {
    git(["checkout", id])
}

/// `git format-patch -o <dir> -1`: writes the HEAD commit as a single patch.
pub fn format_patch(out_dir: &Path) -> CommandSpec {
    git([
        "format-patch".to_string(),
        "-o".to_string(),
        out_dir.display().to_string(),
        "-1".to_string(),
    ])
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(CheckError::UserError)` - If the working directory is not inside a git repository
/// * `Err(CheckError::Launch)` - If git itself cannot be started
pub fn repo_root(runner: &dyn CommandRunner) -> Result<PathBuf> {
    let output = runner.run(&git(["rev-parse", "--show-toplevel"]))?;

    if output.success() {
        return Ok(PathBuf::from(output.stdout.trim()));
    }

    let stderr = output.stderr.trim();
    if stderr.contains("not a git repository") || stderr.is_empty() {
        Err(CheckError::UserError(
            "not inside a git repository. Run from within a git repository or pass --repo-dir."
                .to_string(),
        ))
    } else {
        Err(CheckError::UserError(format!("git rev-parse failed: {}", stderr)))
    }
}
