//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `OCC__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod logging;
pub mod realtime;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::realtime::RealtimeConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration sources (default.toml + environment overlay + env vars).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Real-time hub settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default` with a `config/{env}` overlay and environment
    /// variables prefixed with `OCC__`. Missing files are skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        Self::build(dir, env, environment())
    }

    fn build(dir: &str, env: &str, environment: config::Environment) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Rejects values the server cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.realtime.client_buffer_size == 0 {
            return Err(AppError::configuration(
                "realtime.client_buffer_size must be at least 1",
            ));
        }
        if self.realtime.max_message_bytes == 0 {
            return Err(AppError::configuration(
                "realtime.max_message_bytes must be at least 1",
            ));
        }
        Ok(())
    }

    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `OCC__SECTION__FIELD` environment overlay.
fn environment() -> config::Environment {
    config::Environment::with_prefix("OCC")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
