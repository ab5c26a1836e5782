//! CLI response types returned by `sbox` commands.
//!
//! These structs define the shape of JSON output for `sbox feed`,
//! `sbox stats`, `sbox admin login`, and `sbox admin delete`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Suggestion;

/// Message shown by the public feed when nothing has been submitted.
pub const EMPTY_FEED_MESSAGE: &str =
    "No Suggestions Yet. Be the first to submit a suggestion and help improve our university!";

/// Response from `sbox feed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedResponse {
    pub total: u32,
    pub suggestions: Vec<Suggestion>,
    /// Present only when the store holds no suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
}

/// Response from `sbox stats`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct SuggestionStats {
    pub total: u32,
    /// Records whose status is `Implemented` (or the legacy `Resolved`).
    pub implemented: u32,
    /// Distinct department labels.
    pub departments: u32,
}

/// Response from `sbox admin login` and the session check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub login_time: Option<i64>,
    pub expires_at: Option<i64>,
}

/// Response from `sbox admin delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub deleted: Suggestion,
    pub remaining: u32,
}
