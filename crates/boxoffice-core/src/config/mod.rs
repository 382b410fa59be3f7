//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a serde default so the engine boots
//! with no configuration files present.

pub mod booking;
pub mod logging;
pub mod scheduling;
pub mod worker;

use serde::{Deserialize, Serialize};

use self::booking::BookingConfig;
use self::logging::LoggingConfig;
use self::scheduling::SchedulingConfig;
use self::worker::WorkerConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Booking workflow settings (hold TTL, tax rate).
    #[serde(default)]
    pub booking: BookingConfig,
    /// Showtime scheduling settings (turnaround buffer).
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    /// Background worker settings (hold reaper cadence).
    #[serde(default)]
    pub worker: WorkerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific
    /// overlay and environment variables prefixed with `BOXOFFICE__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BOXOFFICE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
