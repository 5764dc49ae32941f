//! Test log output.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
static DEFAULT_FILTER: &str = "warn";

/// Install a `tracing` subscriber writing through the test harness's captured output.
///
/// Honors `RUST_LOG`. Safe to call from every test; only the first call installs anything.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
