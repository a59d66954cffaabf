//! Tests for config functionality.

use crate::build::Thoroughness;
use crate::config::{CONFIG_FILE_NAME, Config, resolve_checkpatch_path};
use crate::error::CheckError;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.check_git_log_script, "devtools/check-git-log.sh");
    assert_eq!(config.test_build_script, "devtools/test-build.sh");
    assert_eq!(config.checkpatches_script, "devtools/checkpatches.sh");
    assert_eq!(config.build_target_prefix, "x86_64-native-linuxapp-");
    assert_eq!(config.shared_target_suffix, "+shared");
    assert_eq!(config.checkpatch_env_var, "DPDK_CHECKPATCH_PATH");
    assert_eq!(config.num_jobs, 1);
    assert_eq!(config.build_type, Thoroughness::Full);
    assert!(config.use_gcc);
    assert!(!config.use_clang);
    assert!(config.run_checkgitlog);
    assert!(config.run_checkpatch);
    assert!(!config.exit_on_error);
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
num_jobs: 8
use_clang: true
build_type: short
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.num_jobs, 8);
    assert!(config.use_clang);
    assert_eq!(config.build_type, Thoroughness::Short);

    // Unspecified values should use defaults
    assert!(config.use_gcc);
    assert_eq!(config.test_build_script, "devtools/test-build.sh");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
num_jobs: 2
some_future_option: true
nested:
  key: value
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.num_jobs, 2);
}

#[test]
fn test_invalid_build_type_rejected() {
    let result = Config::from_yaml("build_type: thorough\n");
    assert!(matches!(result, Err(CheckError::UserError(_))));
}

#[test]
fn test_validation_rejects_zero_jobs() {
    let err = Config::from_yaml("num_jobs: 0\n").unwrap_err();
    assert!(err.to_string().contains("num_jobs"));
}

#[test]
fn test_validation_rejects_empty_script() {
    let err = Config::from_yaml("test_build_script: \"\"\n").unwrap_err();
    assert!(err.to_string().contains("test_build_script"));
}

#[test]
fn test_validation_rejects_bad_env_var_name() {
    let err = Config::from_yaml("checkpatch_env_var: \"A=B\"\n").unwrap_err();
    assert!(err.to_string().contains("checkpatch_env_var"));
}

#[test]
fn test_load_for_repo_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_for_repo(temp.path(), None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_for_repo_reads_repo_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(CONFIG_FILE_NAME), "exit_on_error: true\n").unwrap();

    let config = Config::load_for_repo(temp.path(), None).unwrap();
    assert!(config.exit_on_error);
}

#[test]
fn test_load_for_repo_explicit_missing_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.yaml");
    let err = Config::load_for_repo(temp.path(), Some(&missing)).unwrap_err();
    assert!(matches!(err, CheckError::UserError(_)));
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn test_pipeline_policy_mirrors_config() {
    let config = Config {
        exit_on_error: true,
        run_checkpatch: false,
        use_clang: true,
        build_type: Thoroughness::Skip,
        ..Default::default()
    };
    let policy = config.pipeline_policy();

    assert!(policy.exit_on_error);
    assert!(policy.run_message_check);
    assert!(!policy.run_patch_check);
    assert!(policy.toolchains.gcc);
    assert!(policy.toolchains.clang);
    assert_eq!(policy.thoroughness, Thoroughness::Skip);
}

#[test]
fn test_stage_settings_carry_resolved_path() {
    let config = Config {
        num_jobs: 16,
        ..Default::default()
    };
    let settings = config.stage_settings("/custom/checkpatch.pl".to_string());

    assert_eq!(settings.build.jobs, 16);
    assert_eq!(settings.patch.checkpatch_path, "/custom/checkpatch.pl");
    assert_eq!(settings.patch.env_var, "DPDK_CHECKPATCH_PATH");
    assert_eq!(settings.check_git_log_script, "devtools/check-git-log.sh");
}

const TEST_ENV_VAR: &str = "CHECK_COMMITS_TEST_CHECKPATCH_PATH";

fn env_config() -> Config {
    Config {
        checkpatch_env_var: TEST_ENV_VAR.to_string(),
        default_checkpatch_path: "/default/checkpatch.pl".to_string(),
        ..Default::default()
    }
}

#[test]
#[serial]
fn test_checkpatch_path_from_environment() {
    // SAFETY: serialized with every other test that touches this variable.
    unsafe { std::env::set_var(TEST_ENV_VAR, "/env/checkpatch.pl") };
    let path = resolve_checkpatch_path(&env_config());
    unsafe { std::env::remove_var(TEST_ENV_VAR) };

    assert_eq!(path, "/env/checkpatch.pl");
}

#[test]
#[serial]
fn test_checkpatch_path_defaults_when_unset() {
    // SAFETY: serialized with every other test that touches this variable.
    unsafe { std::env::remove_var(TEST_ENV_VAR) };
    assert_eq!(resolve_checkpatch_path(&env_config()), "/default/checkpatch.pl");
}

#[test]
#[serial]
fn test_checkpatch_path_defaults_when_empty() {
    // SAFETY: serialized with every other test that touches this variable.
    unsafe { std::env::set_var(TEST_ENV_VAR, "") };
    let path = resolve_checkpatch_path(&env_config());
    unsafe { std::env::remove_var(TEST_ENV_VAR) };

    assert_eq!(path, "/default/checkpatch.pl");
}
