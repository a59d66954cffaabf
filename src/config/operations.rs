//! Config loading, validation, and conversion into run settings.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::build::{BuildSettings, ToolchainSet};
use crate::error::{CheckError, Result};
use crate::pipeline::PipelinePolicy;
use crate::stages::{PatchCheckSettings, StageSettings};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CheckError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config for a run.
    ///
    /// An explicit path must exist. Otherwise `.check-commits.yaml` in
    /// `repo_dir` is used when present, and built-in defaults when not.
    pub fn load_for_repo(repo_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = repo_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CheckError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - script paths must be non-empty
    /// - `num_jobs` must be positive
    /// - `checkpatch_env_var` must be a non-empty name without `=`
    pub fn validate(&self) -> Result<()> {
        let scripts = [
            ("check_git_log_script", &self.check_git_log_script),
            ("test_build_script", &self.test_build_script),
            ("checkpatches_script", &self.checkpatches_script),
        ];
        for (field, value) in scripts {
            if value.trim().is_empty() {
                return Err(CheckError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }

        if self.num_jobs == 0 {
            return Err(CheckError::UserError(
                "config validation failed: num_jobs must be greater than 0".to_string(),
            ));
        }

        if self.checkpatch_env_var.is_empty() || self.checkpatch_env_var.contains('=') {
            return Err(CheckError::UserError(format!(
                "config validation failed: checkpatch_env_var '{}' is not a valid variable name",
                self.checkpatch_env_var
            )));
        }

        Ok(())
    }

    /// Stage selection and failure policy for the pipeline.
    pub fn pipeline_policy(&self) -> PipelinePolicy {
        PipelinePolicy {
            exit_on_error: self.exit_on_error,
            run_message_check: self.run_checkgitlog,
            run_patch_check: self.run_checkpatch,
            toolchains: ToolchainSet {
                gcc: self.use_gcc,
                clang: self.use_clang,
            },
            thoroughness: self.build_type,
        }
    }

    /// Script locations and naming for the stages.
    ///
    /// `checkpatch_path` is the already-resolved backing script location
    /// (see [`resolve_checkpatch_path`]).
    pub fn stage_settings(&self, checkpatch_path: String) -> StageSettings {
        StageSettings {
            check_git_log_script: self.check_git_log_script.clone(),
            build: BuildSettings {
                script: self.test_build_script.clone(),
                target_prefix: self.build_target_prefix.clone(),
                shared_suffix: self.shared_target_suffix.clone(),
                jobs: self.num_jobs,
            },
            patch: PatchCheckSettings {
                script: self.checkpatches_script.clone(),
                env_var: self.checkpatch_env_var.clone(),
                checkpatch_path,
            },
        }
    }
}

/// Location of the checkpatch backing script.
///
/// The environment variable named by `checkpatch_env_var` wins when it is set
/// and non-empty; otherwise `default_checkpatch_path` is used.
pub fn resolve_checkpatch_path(config: &Config) -> String {
    match std::env::var(&config.checkpatch_env_var) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            tracing::debug!(
                var = %config.checkpatch_env_var,
                default = %config.default_checkpatch_path,
                "checkpatch variable unset, using default"
            );
            config.default_checkpatch_path.clone()
        }
    }
}
