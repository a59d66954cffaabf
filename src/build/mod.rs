//! Build matrix types and planning.
//!
//! A build run is a flat list of [`BuildConfiguration`]s derived from the
//! enabled toolchains and the requested [`Thoroughness`]. Each enabled
//! toolchain is built twice: default linkage, then shared-library linkage.

mod plan;

pub use plan::{build_command, plan};

use serde::Deserialize;

/// Compiler used to build the project. Declaration order is build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
    /// Primary compiler.
    Gcc,
    /// Secondary compiler.
    Clang,
}

impl Toolchain {
    /// Primary before secondary.
    pub const ALL: [Toolchain; 2] = [Toolchain::Gcc, Toolchain::Clang];

    pub fn as_str(&self) -> &'static str {
        match self {
            Toolchain::Gcc => "gcc",
            Toolchain::Clang => "clang",
        }
    }
}

impl std::fmt::Display for Toolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which toolchains are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolchainSet {
    pub gcc: bool,
    pub clang: bool,
}

impl Default for ToolchainSet {
    fn default() -> Self {
        Self {
            gcc: true,
            clang: false,
        }
    }
}

impl ToolchainSet {
    pub fn is_enabled(&self, toolchain: Toolchain) -> bool {
        match toolchain {
            Toolchain::Gcc => self.gcc,
            Toolchain::Clang => self.clang,
        }
    }

    /// Enabled toolchains in build order.
    pub fn enabled(&self) -> impl Iterator<Item = Toolchain> + '_ {
        Toolchain::ALL
            .into_iter()
            .filter(move |t| self.is_enabled(*t))
    }
}

/// Library linkage mode for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    Default,
    Shared,
}

impl Linkage {
    pub const ALL: [Linkage; 2] = [Linkage::Default, Linkage::Shared];
}

/// How much of the build surface each build covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Thoroughness {
    /// Build static and shared configs, tests, examples and docs.
    #[default]
    Full,
    /// Skip tests, examples and docs when building.
    Short,
    /// Don't run the builds at all.
    Skip,
}

impl std::fmt::Display for Thoroughness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Thoroughness::Full => write!(f, "full"),
            Thoroughness::Short => write!(f, "short"),
            Thoroughness::Skip => write!(f, "skip"),
        }
    }
}

/// One planned build invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfiguration {
    pub toolchain: Toolchain,
    pub linkage: Linkage,
    pub thoroughness: Thoroughness,
}

/// Settings the build script needs beyond the configuration itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Path to the build-invocation script, relative to the repository.
    pub script: String,
    /// Target prefix the toolchain name is appended to.
    pub target_prefix: String,
    /// Suffix appended to the target for shared-library builds.
    pub shared_suffix: String,
    /// Concurrent job count forwarded to the script.
    pub jobs: u32,
}

impl BuildConfiguration {
    /// Target string for the build script, e.g. `x86_64-native-linuxapp-gcc+shared`.
    pub fn target(&self, settings: &BuildSettings) -> String {
        let mut target = format!("{}{}", settings.target_prefix, self.toolchain);
        if self.linkage == Linkage::Shared {
            target.push_str(&settings.shared_suffix);
        }
        target
    }
}
