//! External command invocation for check-commits.
//!
//! Every external tool (git, the commit-message checker, the build script,
//! the patch-style checker) is reached through the [`CommandRunner`] trait.
//! The system implementation spawns real processes in the repository
//! directory; tests swap in a scripted fake without touching pipeline logic.
//!
//! A command that runs and exits non-zero is NOT an error here: it yields a
//! [`CommandOutput`] whose `success()` is false. Only a command that cannot be
//! started at all produces [`CheckError::Launch`].

use crate::error::{CheckError, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::process::Command;

/// A fully described external command: program, arguments, and environment
/// overrides merged over the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// The command line as a user would type it (shell-quoted where needed).
    ///
    /// Environment overrides are not included.
    pub fn display(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(self.args.iter()))
    }

    /// Value of an environment override, if one is set.
    #[cfg(test)]
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Captured result of a command that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run with the given stdout.
    #[cfg(test)]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and stdout.
    #[cfg(test)]
    pub fn failed(exit_code: i32, stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Standard output followed by standard error.
    ///
    /// The streams are captured separately, so lines are not interleaved in
    /// the order the command wrote them.
    pub fn combined(&self) -> String {
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        match (stdout.is_empty(), stderr.is_empty()) {
            (_, true) => stdout.to_string(),
            (true, false) => stderr.to_string(),
            (false, false) => format!("{}\n{}", stdout, stderr),
        }
    }
}

/// Capability interface for running one external command.
pub trait CommandRunner {
    /// Run `command` to completion and capture its output.
    ///
    /// Returns `Err(CheckError::Launch)` only when the command cannot be
    /// started; a non-zero exit is reported through [`CommandOutput`].
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput>;
}

/// Runs commands as real child processes inside the repository directory.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        tracing::debug!(command = %command.display(), cwd = %self.cwd.display(), "launching");

        let output = Command::new(&command.program)
            .args(&command.args)
            .envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&self.cwd)
            .output()
            .map_err(|e| CheckError::Launch {
                command: command.display(),
                message: e.to_string(),
            })?;

        let exit_code = output.status.code();
        tracing::debug!(command = %command.program, ?exit_code, "finished");

        Ok(CommandOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of one external check. Produced once per invocation, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Stage-qualified name, e.g. `check-git-log` or `build:x86_64-native-linuxapp-gcc`.
    pub name: String,
    pub passed: bool,
    /// Combined stdout/stderr of the command.
    pub output: String,
}

impl CheckOutcome {
    pub fn from_output(name: impl Into<String>, output: &CommandOutput) -> Self {
        Self {
            name: name.into(),
            passed: output.success(),
            output: output.combined(),
        }
    }
}

/// Run a single named check and capture its outcome.
pub fn run_check(
    runner: &dyn CommandRunner,
    name: &str,
    command: &CommandSpec,
) -> Result<CheckOutcome> {
    let output = runner.run(command)?;
    Ok(CheckOutcome::from_output(name, &output))
}
