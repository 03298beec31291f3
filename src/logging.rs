// src/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber on stderr so stdout stays a clean report.
///
/// Reads `RUST_LOG` (or `GLYPHWATCH_LOG`) to set the filter. Defaults to
/// `warn`, or `debug` when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("GLYPHWATCH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
