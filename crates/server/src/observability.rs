//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Default verbosity when `RUST_LOG` is unset: our crates at info, HTTP
/// client noise at warn.
const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

/// Initialize structured JSON logging for the process.
///
/// Honors `RUST_LOG` when present. Calling more than once is harmless; the
/// extra calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .try_init();
}
