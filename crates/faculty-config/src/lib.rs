//! # faculty-config
//!
//! Layered configuration loading for the faculty task store using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FACULTY_*` prefix, `__` as separator)
//! 2. Project-level `.faculty/config.toml`
//! 3. User-level `~/.config/faculty/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `FACULTY_DATABASE__PATH` -> `database.path`,
//! `FACULTY_ANALYTICS__DEFAULT_WINDOW_DAYS` -> `analytics.default_window_days`, etc.
//!
//! ```no_run
//! use faculty_config::FacultyConfig;
//!
//! let config = FacultyConfig::load_with_dotenv().expect("config");
//! if config.database.is_remote() {
//!     println!("remote database: {}", config.database.url);
//! }
//! ```

mod analytics;
mod database;
mod error;
mod logging;

pub use analytics::{AnalyticsConfig, MAX_WINDOW_DAYS};
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use logging::LoggingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FacultyConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FacultyConfig {
    /// Load configuration from TOML files and environment variables, then validate.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if present), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".faculty/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("FACULTY_").split("__"))
    }

    /// Reject values that parse but make no sense.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let days = self.analytics.default_window_days;
        if !(1..=MAX_WINDOW_DAYS).contains(&days) {
            return Err(ConfigError::InvalidValue {
                field: "analytics.default_window_days".into(),
                reason: format!("{days} is outside 1..={MAX_WINDOW_DAYS}"),
            });
        }
        if self.database.path.trim().is_empty() && !self.database.is_remote() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "empty path and no remote url/auth_token".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("faculty").join("config.toml"))
    }
}
