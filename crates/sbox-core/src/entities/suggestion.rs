use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Status, SuggestionStatus};
use crate::errors::CoreError;
use crate::ids::SuggestionId;
use crate::lenient;

pub const DEFAULT_DEPARTMENT: &str = "General";
pub const DEFAULT_TAG: &str = "Other";

fn default_department() -> String {
    DEFAULT_DEPARTMENT.to_string()
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

/// A visitor-submitted suggestion and its triage state.
///
/// Missing and `null` fields are tolerated on read and defaulted; unknown
/// fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Creation timestamp in ms, doubling as the lookup key. `0` means unassigned.
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: SuggestionId,
    #[serde(default = "default_department", deserialize_with = "lenient::department")]
    pub department: String,
    /// Free-form category label.
    #[serde(default = "default_tag", deserialize_with = "lenient::tag")]
    pub tag: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub status: Status,
    /// Empty until an administrator responds.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub admin_response: String,
    /// Creation time in ms since the epoch. Sole sort key.
    #[serde(default, deserialize_with = "lenient::millis")]
    pub created: i64,
}

impl Suggestion {
    /// Build a fresh `Pending` record from validated input.
    #[must_use]
    pub fn from_new(input: NewSuggestion, id: SuggestionId) -> Self {
        Self {
            id,
            department: input.department,
            tag: input.tag,
            text: input.text,
            status: SuggestionStatus::Pending.into(),
            admin_response: String::new(),
            created: id.get(),
        }
    }

    #[must_use]
    pub fn has_response(&self) -> bool {
        !self.admin_response.trim().is_empty()
    }

    /// Department for display; blank stored values read as `General`.
    #[must_use]
    pub fn department_label(&self) -> &str {
        label_or(&self.department, DEFAULT_DEPARTMENT)
    }

    /// Tag for display; blank stored values read as `Other`.
    #[must_use]
    pub fn tag_label(&self) -> &str {
        label_or(&self.tag, DEFAULT_TAG)
    }
}

fn label_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

/// Validated input for creating a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSuggestion {
    pub department: String,
    pub tag: String,
    pub text: String,
}

impl NewSuggestion {
    /// Trim all inputs and apply defaults.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when `text` is empty after trimming.
    pub fn new(department: &str, tag: &str, text: &str) -> Result<Self, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Validation(
                "suggestion text must not be empty".into(),
            ));
        }
        Ok(Self {
            department: label_or(department, DEFAULT_DEPARTMENT).to_string(),
            tag: label_or(tag, DEFAULT_TAG).to_string(),
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_suggestion_applies_defaults() {
        let input = NewSuggestion::new("  ", "", "  Extend hours ").unwrap();
        assert_eq!(input.department, "General");
        assert_eq!(input.tag, "Other");
        assert_eq!(input.text, "Extend hours");
    }

    #[test]
    fn new_suggestion_rejects_blank_text() {
        let err = NewSuggestion::new("Library", "Facilities", " \n\t ").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn from_new_starts_pending_without_response() {
        let input = NewSuggestion::new("Library", "Facilities", "Extend hours").unwrap();
        let s = Suggestion::from_new(input, SuggestionId::new(1_000));
        assert_eq!(s.status.as_str(), "Pending");
        assert_eq!(s.admin_response, "");
        assert_eq!(s.created, 1_000);
        assert!(!s.has_response());
    }

    #[test]
    fn missing_fields_are_defaulted() {
        let s: Suggestion = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(s.id, SuggestionId::new(0));
        assert_eq!(s.department, "General");
        assert_eq!(s.tag, "Other");
        assert_eq!(s.status.as_str(), "Pending");
        assert_eq!(s.admin_response, "");
        assert_eq!(s.created, 0);
    }

    #[test]
    fn unknown_fields_are_ignored_and_names_are_camel_case() {
        let s: Suggestion = serde_json::from_str(
            r#"{"id":"5","text":"x","adminResponse":"ok","votes":3,"created":5}"#,
        )
        .unwrap();
        assert_eq!(s.id.get(), 5);
        assert_eq!(s.admin_response, "ok");

        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("adminResponse").is_some());
        assert!(json.get("votes").is_none());
    }

    #[test]
    fn null_fields_read_as_missing() {
        let s: Suggestion = serde_json::from_str(
            r#"{"id":null,"department":null,"tag":null,"text":"x","status":null,"adminResponse":null,"created":null}"#,
        )
        .unwrap();
        assert_eq!(s.id, SuggestionId::default());
        assert_eq!(s.department, "General");
        assert_eq!(s.tag, "Other");
        assert_eq!(s.status.as_str(), "Pending");
        assert_eq!(s.admin_response, "");
        assert_eq!(s.created, 0);
        assert!(!s.has_response());
    }

    #[test]
    fn string_typed_id_and_created_are_normalized() {
        let s: Suggestion = serde_json::from_str(
            r#"{"id":"1700000000000","text":"legacy","created":"1700000000000"}"#,
        )
        .unwrap();
        assert_eq!(s.id.get(), 1_700_000_000_000);
        assert_eq!(s.created, 1_700_000_000_000);
    }

    #[test]
    fn unusable_id_reads_as_unassigned() {
        let s: Suggestion = serde_json::from_str(r#"{"id":"abc","text":"x"}"#).unwrap();
        assert_eq!(s.id, SuggestionId::default());
    }

    #[test]
    fn blank_labels_fall_back_for_display() {
        let s: Suggestion =
            serde_json::from_str(r#"{"department":" ","tag":"","text":"x"}"#).unwrap();
        assert_eq!(s.department_label(), "General");
        assert_eq!(s.tag_label(), "Other");
    }

    #[test]
    fn whitespace_only_response_is_no_response() {
        let s: Suggestion = serde_json::from_str(r#"{"text":"x","adminResponse":"   "}"#).unwrap();
        assert!(!s.has_response());
    }
}
