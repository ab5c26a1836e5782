//! Entity structs for the suggestion box.
//!
//! The persisted list holds a single entity type. Structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema export.

mod suggestion;

pub use suggestion::{DEFAULT_DEPARTMENT, DEFAULT_TAG, NewSuggestion, Suggestion};
