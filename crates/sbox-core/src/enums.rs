//! Status vocabulary and the suggestion triage state machine.
//!
//! Two types cooperate here:
//! - [`SuggestionStatus`] is the closed vocabulary accepted from callers.
//! - [`Status`] is the raw, case-preserving string stored on a record. Stored
//!   data may carry any casing or even an unknown legacy value, so logic
//!   compares it case-insensitively against the vocabulary.
//!
//! ```text
//! Pending ⇄ In Review ⇄ Implemented ⇄ Rejected   (every state reaches every state)
//! ```

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SuggestionStatus
// ---------------------------------------------------------------------------

/// Triage state of a suggestion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum SuggestionStatus {
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Review")]
    InReview,
    #[serde(rename = "Implemented")]
    Implemented,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl SuggestionStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InReview,
        Self::Implemented,
        Self::Rejected,
    ];

    /// Valid next states from the current state.
    ///
    /// Triage is unrestricted: every state, including the current one, is
    /// reachable. There is no terminal state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        &Self::ALL
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Display label, also the persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InReview => "In Review",
            Self::Implemented => "Implemented",
            Self::Rejected => "Rejected",
        }
    }

    /// Derived display key, e.g. `in-review`.
    #[must_use]
    pub fn class_key(self) -> String {
        class_key(self.as_str())
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionStatus {
    type Err = CoreError;

    /// Case-insensitive; whitespace, `-` and `_` are interchangeable separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|status| normalize_label(status.as_str()) == normalized)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown status '{s}' (expected one of: Pending, In Review, Implemented, Rejected)"
                ))
            })
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Status (stored form)
// ---------------------------------------------------------------------------

/// Status string as stored on a record, case preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Status(String);

impl Status {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The vocabulary entry this raw value denotes, if any.
    #[must_use]
    pub fn kind(&self) -> Option<SuggestionStatus> {
        let trimmed = self.0.trim();
        SuggestionStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// Case-insensitive comparison against a vocabulary entry.
    #[must_use]
    pub fn is(&self, status: SuggestionStatus) -> bool {
        self.kind() == Some(status)
    }

    /// Case-insensitive comparison against an arbitrary label.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        self.0.trim().to_lowercase() == label.trim().to_lowercase()
    }

    /// Unknown stored values may move to any vocabulary state.
    #[must_use]
    pub fn can_transition_to(&self, next: SuggestionStatus) -> bool {
        self.kind().is_none_or(|current| current.can_transition_to(next))
    }

    #[must_use]
    pub fn class_key(&self) -> String {
        class_key(&self.0)
    }
}

impl Default for Status {
    fn default() -> Self {
        SuggestionStatus::Pending.into()
    }
}

impl From<SuggestionStatus> for Status {
    fn from(status: SuggestionStatus) -> Self {
        Self(status.as_str().to_string())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lower-case `raw` and collapse every whitespace run into a single `-`.
///
/// Applies to any status string, known or not.
#[must_use]
pub fn class_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}
