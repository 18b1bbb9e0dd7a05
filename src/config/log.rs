//! # Logging Configuration
//!
//! - `LOG_LEVEL` — maximum level: `trace`, `debug`, `info`, `warn`, `error` (default: `warn`)
//! - `LOG_ANSI` — colourise output (default: `false`)
//!
//! A missing or blank `LOG_LEVEL` means the default; an unrecognised one is a
//! [`ConfigError::InvalidLogLevel`].

use tracing::Level;

use crate::config::env::{process_env, read_flag_from, read_string_from};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            ansi: false,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(process_env)
    }

    /// Loads configuration using a custom key provider (for testing/mocking).
    pub fn from_env_with<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let level = match read_string_from(&get, "LOG_LEVEL") {
            Some(raw) => raw
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw))?,
            None => defaults.level,
        };

        Ok(Self {
            level,
            ansi: read_flag_from(&get, "LOG_ANSI", defaults.ansi),
        })
    }
}
