//! Switching the working tree to a revision.

use crate::error::{CheckError, Result};
use crate::git;
use crate::invoke::CommandRunner;
use crate::revision::Revision;

/// Check out `revision` in the working tree.
///
/// Any failure is fatal: a later check would otherwise validate the wrong
/// tree. Launch failures are reported as checkout failures too.
pub fn checkout(runner: &dyn CommandRunner, revision: &Revision) -> Result<()> {
    let output = runner
        .run(&git::checkout(&revision.id))
        .map_err(|e| CheckError::Checkout {
            revision: revision.id.clone(),
            message: e.to_string(),
        })?;

    if output.success() {
        tracing::debug!(revision = %revision.id, "checked out");
        Ok(())
    } else {
        Err(CheckError::Checkout {
            revision: revision.id.clone(),
            message: output.combined(),
        })
    }
}
