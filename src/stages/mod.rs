//! The per-revision validation stages.
//!
//! Stages always run in this order: commit-message style, build matrix,
//! patch style. Each produces one [`CheckOutcome`](crate::invoke::CheckOutcome)
//! per external check; the pipeline decides what a failure means.

pub mod message;
pub mod patch;

use crate::build::BuildSettings;

pub use message::message_check_command;
pub use patch::{PatchCheckSettings, run_patch_check};

/// Outcome name of the commit-message style check.
pub const MESSAGE_CHECK: &str = "check-git-log";

/// Outcome name of the patch style check.
pub const PATCH_CHECK: &str = "checkpatches";

/// Outcome name for one build configuration.
pub fn build_check_name(target: &str) -> String {
    format!("build:{}", target)
}

/// Everything the stages need to know about the external scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSettings {
    /// Commit-message style checker script.
    pub check_git_log_script: String,
    pub build: BuildSettings,
    pub patch: PatchCheckSettings,
}
