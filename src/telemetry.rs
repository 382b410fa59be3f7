//! Tracing/logging initialization.

use tracing_subscriber::{EnvFilter, fmt};

use boxoffice_core::config::logging::LoggingConfig;

/// Initialize tracing output. `RUST_LOG` overrides the configured
/// level filter when set.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
