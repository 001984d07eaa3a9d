//! Console logging setup

use std::sync::OnceLock;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "info";

/// Initialize the global subscriber once. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let result = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .try_init();

        if result.is_err() {
            // Someone else installed a subscriber first; keep theirs
            tracing::debug!("Global tracing subscriber already initialized");
        }
    });
}
