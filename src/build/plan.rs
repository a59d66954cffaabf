//! Build matrix expansion and build command construction.

use super::{BuildConfiguration, BuildSettings, Linkage, Thoroughness, ToolchainSet};
use crate::invoke::CommandSpec;

/// Expand enabled toolchains into an ordered list of build configurations.
///
/// Order is toolchain (primary first), then default before shared linkage.
/// `Thoroughness::Skip` yields no configurations at all.
pub fn plan(toolchains: &ToolchainSet, thoroughness: Thoroughness) -> Vec<BuildConfiguration> {
    if thoroughness == Thoroughness::Skip {
        return Vec::new();
    }

    toolchains
        .enabled()
        .flat_map(|toolchain| {
            Linkage::ALL.into_iter().map(move |linkage| BuildConfiguration {
                toolchain,
                linkage,
                thoroughness,
            })
        })
        .collect()
}

/// Build script invocation: `<script> -j<N> [-s] <target>`.
pub fn build_command(config: &BuildConfiguration, settings: &BuildSettings) -> CommandSpec {
    let mut cmd = CommandSpec::new(&settings.script).arg(format!("-j{}", settings.jobs));
    if config.thoroughness == Thoroughness::Short {
        cmd = cmd.arg("-s");
    }
    cmd.arg(config.target(settings))
}
