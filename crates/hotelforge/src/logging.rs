//! Log output setup for binaries that host the server.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_directive` (e.g. `"info"`) when `RUST_LOG` is
/// unset or unparsable. Does nothing if a global subscriber is already set,
/// so tests and embedding applications can call it freely.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
