//! Storage location and key layout.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Key holding the authoritative suggestion list.
pub const DEFAULT_CANONICAL_KEY: &str = "muni_suggestions_v1";

/// Substring (case-insensitive) marking a key as a legacy suggestion list.
pub const DEFAULT_LEGACY_PATTERN: &str = "suggestion";

fn default_path() -> String {
    ".sbox/storage.json".to_string()
}

fn default_canonical_key() -> String {
    DEFAULT_CANONICAL_KEY.to_string()
}

fn default_legacy_pattern() -> String {
    DEFAULT_LEGACY_PATTERN.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON key-value file.
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_canonical_key")]
    pub canonical_key: String,

    #[serde(default = "default_legacy_pattern")]
    pub legacy_pattern: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            canonical_key: default_canonical_key(),
            legacy_pattern: default_legacy_pattern(),
        }
    }
}

impl StorageConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(invalid("storage.path", "must not be empty"));
        }
        if self.canonical_key.trim().is_empty() {
            return Err(invalid("storage.canonical_key", "must not be empty"));
        }
        if self.legacy_pattern.trim().is_empty() {
            return Err(invalid(
                "storage.legacy_pattern",
                "must not be empty (an empty pattern would match every key)",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert_eq!(config.path, ".sbox/storage.json");
        assert_eq!(config.canonical_key, "muni_suggestions_v1");
        assert_eq!(config.legacy_pattern, "suggestion");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let config = StorageConfig {
            legacy_pattern: "  ".into(),
            ..StorageConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("storage.legacy_pattern"));
    }
}
