//! Diagnostic logging setup.
//!
//! User-facing output goes through [crate::ui]; this only configures the
//! `tracing` subscriber behind the `debug!`/`info!` calls on git and `gh`
//! invocations. `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "calver_release=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber, writing to stderr without timestamps.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
