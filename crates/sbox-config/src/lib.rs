//! # sbox-config
//!
//! Layered configuration loading for the suggestion box using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SBOX_*` prefix, `__` as separator)
//! 2. Project-level `.sbox/config.toml`
//! 3. User-level `~/.config/sbox/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SBOX_STORAGE__PATH` -> `storage.path`,
//! `SBOX_FEED__PUBLIC_LIMIT` -> `feed.public_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sbox_config::SboxConfig;
//!
//! let config = SboxConfig::load_with_dotenv().expect("config");
//! println!("store: {}", config.storage.path);
//! ```

mod admin;
mod error;
mod feed;
mod storage;

pub use admin::AdminConfig;
pub use error::ConfigError;
pub use feed::FeedConfig;
pub use storage::{DEFAULT_CANONICAL_KEY, DEFAULT_LEGACY_PATTERN, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SboxConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl SboxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".sbox/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SBOX_").split("__"))
    }

    /// Reject values that would make the store unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        if self.feed.public_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.public_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.feed.max_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.max_chars".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.admin.session_ttl_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "admin.session_ttl_hours".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sbox").join("config.toml"))
    }
}
