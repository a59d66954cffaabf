//! CLI argument parsing for check-commits.
//!
//! Uses clap derive macros for declarative argument definitions. Every option
//! that has a config-file counterpart is optional here; when given it
//! overrides the value loaded from `.check-commits.yaml`.

use crate::build::Thoroughness;
use crate::config::Config;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Validate every commit in a revision range, oldest first.
///
/// Each commit is checked out and run through the commit-message style
/// check, the build matrix, and the patch style check.
#[derive(Parser, Debug)]
#[command(name = "check-commits")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start of the range (exclusive).
    pub start_ref: String,

    /// End of the range (inclusive).
    pub end_ref: String,

    /// Repository to validate.
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub repo_dir: PathBuf,

    /// Number of concurrent build jobs passed to the build script.
    #[arg(short = 'j', long, value_name = "N")]
    pub num_jobs: Option<u32>,

    /// Stop the whole run at the first failing check.
    #[arg(short = 'e', long = "exit-on-err")]
    pub exit_on_err: bool,

    /// How thorough each build should be.
    #[arg(long, value_enum)]
    pub build_type: Option<Thoroughness>,

    /// Build with gcc.
    #[arg(long, value_enum)]
    pub use_gcc: Option<Choice>,

    /// Build with clang.
    #[arg(long, value_enum)]
    pub use_clang: Option<Choice>,

    /// Run the commit-message style check.
    #[arg(long, value_enum)]
    pub run_checkgitlog: Option<Choice>,

    /// Run the patch style check.
    #[arg(long, value_enum)]
    pub run_checkpatch: Option<Choice>,

    /// Config file (default: .check-commits.yaml in the repository, if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A yes/no switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Choice {
    Yes,
    No,
}

impl From<Choice> for bool {
    fn from(choice: Choice) -> bool {
        choice == Choice::Yes
    }
}

impl Cli {
    /// Overlay the options given on the command line onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(jobs) = self.num_jobs {
            config.num_jobs = jobs;
        }
        if self.exit_on_err {
            config.exit_on_error = true;
        }
        if let Some(build_type) = self.build_type {
            config.build_type = build_type;
        }
        if let Some(choice) = self.use_gcc {
            config.use_gcc = choice.into();
        }
        if let Some(choice) = self.use_clang {
            config.use_clang = choice.into();
        }
        if let Some(choice) = self.run_checkgitlog {
            config.run_checkgitlog = choice.into();
        }
        if let Some(choice) = self.run_checkpatch {
            config.run_checkpatch = choice.into();
        }
    }
}
