//! Commit-message style check.

use crate::invoke::CommandSpec;

/// `<script> -1`: check the message of the HEAD commit only.
pub fn message_check_command(script: &str) -> CommandSpec {
    CommandSpec::new(script).arg("-1")
}
