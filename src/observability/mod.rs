//! Logging setup
//!
//! All logging goes through `tracing`. The subscriber writes human-readable
//! lines to stdout, filtered by `RUST_LOG` when it is set.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is absent
pub const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt().with_env_filter(filter).try_init();
}
