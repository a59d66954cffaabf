//! Configuration constants and default values for check-commits.

use crate::build::Thoroughness;

/// Config file name looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = ".check-commits.yaml";

// Default value functions for serde
pub(crate) fn default_check_git_log_script() -> String {
    "devtools/check-git-log.sh".to_string()
}
pub(crate) fn default_test_build_script() -> String {
    "devtools/test-build.sh".to_string()
}
pub(crate) fn default_checkpatches_script() -> String {
    "devtools/checkpatches.sh".to_string()
}
pub(crate) fn default_build_target_prefix() -> String {
    "x86_64-native-linuxapp-".to_string()
}
pub(crate) fn default_shared_target_suffix() -> String {
    "+shared".to_string()
}
pub(crate) fn default_checkpatch_env_var() -> String {
    "DPDK_CHECKPATCH_PATH".to_string()
}
pub(crate) fn default_checkpatch_path() -> String {
    "/usr/share/checkpatch/checkpatch.pl".to_string()
}
pub(crate) fn default_num_jobs() -> u32 {
    1
}
pub(crate) fn default_build_type() -> Thoroughness {
    Thoroughness::Full
}
pub(crate) fn default_true() -> bool {
    true
}
