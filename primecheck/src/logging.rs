//! Diagnostic tracing for the CLI and harness binaries.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. Product output
//! (check results, demo transcript) goes to stdout and is unaffected.
//! The [`crate::core`] modules never log.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=primecheck=debug cargo run -p primecheck -- demo
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
