//! `tracing` subscriber setup for the command-line entry point.
//!
//! Log output goes to stderr so stdout carries only the sample text.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::{fmt, EnvFilter};

/// Map the `-v` count to a default filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging. Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
