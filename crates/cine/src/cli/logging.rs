//! Diagnostic logging setup.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CINE_LOG=cine_rank=debug`.
pub const LOG_ENV: &str = "CINE_LOG";

/// Filter used when `CINE_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so that `--json` output on stdout stays machine-readable.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}
