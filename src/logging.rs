//! Diagnostic logging setup.
//!
//! Progress and results go to stdout/stderr directly; `tracing` carries
//! diagnostics only. `RUST_LOG` takes precedence over `-v`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}
