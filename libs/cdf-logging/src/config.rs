//! Logging configuration.
//!
//! Values are layered with figment, later layers winning:
//!
//! 1. [`LoggingConfig::default`]
//! 2. an optional YAML file
//! 3. `CDF_LOGGING_*` environment variables (`CDF_LOGGING_MIN_LEVEL=warning`)

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// Configuration error for logging setup
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid logging configuration: {source}")]
    Invalid {
        #[source]
        source: Box<figment::Error>,
    },
}

/// Settings of the tracing bridge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Records below this level are gated off.
    pub min_level: LogLevel,
    /// Attach a `MachineName` property.
    pub include_machine_name: bool,
    /// Attach a `ThreadId` property.
    pub include_thread_id: bool,
    /// Attach a `ThreadName` property (unnamed threads are skipped).
    pub include_thread_name: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Information,
            include_machine_name: true,
            include_thread_id: true,
            include_thread_name: false,
        }
    }
}

impl LoggingConfig {
    /// Prefix of the environment variables read by [`LoggingConfig::load`].
    pub const ENV_PREFIX: &'static str = "CDF_LOGGING_";

    /// Loads defaults, then `path` (when given and present), then the environment.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if a layer holds a value of the wrong type
    /// or an unknown level name.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(Self::ENV_PREFIX));
        Self::from_figment(&figment)
    }

    /// Extracts the configuration from an already assembled figment.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` if extraction fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Invalid {
            source: Box::new(e),
        })
    }
}
