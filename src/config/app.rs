//! # Application Configuration Loader
//!
//! Loads every configuration section from environment variables, reading a
//! dotenv file first for non-production environments. `DOTENV_FILE` wins if
//! set, otherwise `.env.{APP_ENV}` is tried, then `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `LOG_LEVEL` | Maximum log level | `"warn"` |
//! | `LOG_ANSI` | Colourised log output | `false` |
//!
//! # Example
//! ```rust,no_run
//! use date_access::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env().expect("invalid configuration");
//! println!("running in {}", cfg.app_env);
//! ```

use std::env;

use crate::config::log::LogConfig;
use crate::error::ConfigError;

/// Top-level application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Environment name from `APP_ENV`.
    pub app_env: String,
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads a dotenv file (outside production) and then the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a present variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if !is_production(&app_env) {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        Ok(Self {
            app_env,
            log: LogConfig::from_env()?,
        })
    }

    /// `true` when `APP_ENV` is `production`; dotenv files were skipped.
    pub fn is_production(&self) -> bool {
        is_production(&self.app_env)
    }
}

fn is_production(app_env: &str) -> bool {
    app_env == "production"
}
