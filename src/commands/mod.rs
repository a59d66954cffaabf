//! Command implementations for check-commits.
//!
//! There is a single command: validate a revision range. This module wires
//! the CLI, config, runner and pipeline together; the work itself lives in
//! [`crate::pipeline`].

mod check;

pub use check::cmd_check;
