//! Configuration model for check-commits.
//!
//! This module defines the Config struct that represents the optional
//! `.check-commits.yaml` file at the repository root. It supports
//! forward-compatible YAML parsing (unknown fields are ignored), defaults for
//! every field, and validation of config values. Command-line flags override
//! anything set here.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::resolve_checkpatch_path;
pub use types::CONFIG_FILE_NAME;
