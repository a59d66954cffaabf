//! Exit code constants for the check-commits CLI.
//!
//! - 0: Success (individual check failures under continue-on-error included)
//! - 1: User error (bad args, unusable repo dir, invalid config)
//! - 2: A check failed while exit-on-error was set
//! - 3: Git failure (range resolution, checkout)
//! - 4: Environment failure (external tool could not be launched, cleanup failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or unusable repository directory.
pub const USER_ERROR: i32 = 1;

/// A check failed and the exit-on-error policy aborted the run.
pub const CHECK_FAILURE: i32 = 2;

/// Git operation failure: unresolvable revision range or failed checkout.
pub const GIT_FAILURE: i32 = 3;

/// An external tool could not be launched, or scratch cleanup failed.
pub const ENVIRONMENT_FAILURE: i32 = 4;
