//! Development-time tracing.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`. The progress
//! lines announcing each written file are product output and always go to
//! stdout, regardless of the filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
///
/// Scoped to this crate: warnings from rendering dependencies (font lookup
/// misses in `usvg`, for instance) stay silent unless asked for.
pub const DEFAULT_FILTER: &str = "perm_tot=warn";

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to [`DEFAULT_FILTER`].
/// Output: stderr, compact format. Call once, from `main`.
///
/// # Example
/// ```bash
/// RUST_LOG=perm_tot=debug perm-tot perm_events.dat popc
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
