//! Config struct definition and default implementation.

use super::types::*;
use crate::build::Thoroughness;
use serde::Deserialize;

/// Configuration for a check-commits run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // External scripts (paths relative to the repository root)
    // =========================================================================
    /// Commit-message style checker.
    #[serde(default = "default_check_git_log_script")]
    pub check_git_log_script: String,

    /// Build-invocation script.
    #[serde(default = "default_test_build_script")]
    pub test_build_script: String,

    /// Patch style checker wrapper.
    #[serde(default = "default_checkpatches_script")]
    pub checkpatches_script: String,

    // =========================================================================
    // Build target naming
    // =========================================================================
    /// Prefix the toolchain name is appended to (e.g. `x86_64-native-linuxapp-`).
    #[serde(default = "default_build_target_prefix")]
    pub build_target_prefix: String,

    /// Suffix appended for shared-library builds.
    #[serde(default = "default_shared_target_suffix")]
    pub shared_target_suffix: String,

    // =========================================================================
    // Patch checker location
    // =========================================================================
    /// Environment variable that locates the checkpatch backing script.
    #[serde(default = "default_checkpatch_env_var")]
    pub checkpatch_env_var: String,

    /// Used when `checkpatch_env_var` is not set in the environment.
    #[serde(default = "default_checkpatch_path")]
    pub default_checkpatch_path: String,

    // =========================================================================
    // Run defaults (overridden by CLI flags)
    // =========================================================================
    /// Concurrent build jobs forwarded to the build script.
    #[serde(default = "default_num_jobs")]
    pub num_jobs: u32,

    #[serde(default = "default_build_type")]
    pub build_type: Thoroughness,

    #[serde(default = "default_true")]
    pub use_gcc: bool,

    #[serde(default)]
    pub use_clang: bool,

    #[serde(default = "default_true")]
    pub run_checkgitlog: bool,

    #[serde(default = "default_true")]
    pub run_checkpatch: bool,

    #[serde(default)]
    pub exit_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_git_log_script: default_check_git_log_script(),
            test_build_script: default_test_build_script(),
            checkpatches_script: default_checkpatches_script(),
            build_target_prefix: default_build_target_prefix(),
            shared_target_suffix: default_shared_target_suffix(),
            checkpatch_env_var: default_checkpatch_env_var(),
            default_checkpatch_path: default_checkpatch_path(),
            num_jobs: default_num_jobs(),
            build_type: default_build_type(),
            use_gcc: default_true(),
            use_clang: false,
            run_checkgitlog: default_true(),
            run_checkpatch: default_true(),
            exit_on_error: false,
        }
    }
}
