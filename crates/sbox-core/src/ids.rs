//! Suggestion ID type and normalization.
//!
//! IDs are creation timestamps in milliseconds since the Unix epoch. Legacy
//! data sometimes carries them as JSON strings; they are normalized to an
//! integer at the deserialization boundary and compared exactly afterwards.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;
use crate::lenient::RawMillis;

/// Unique, never-reused identifier of a suggestion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SuggestionId(i64);

impl SuggestionId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The smallest ID strictly greater than this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SuggestionId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for SuggestionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| CoreError::Validation(format!("invalid suggestion id '{s}': {e}")))
    }
}

impl<'de> Deserialize<'de> for SuggestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawMillis::deserialize(deserializer)?
            .whole()
            .map(Self)
            .ok_or_else(|| {
                serde::de::Error::custom("suggestion id must be a whole number or numeric string")
            })
    }
}
