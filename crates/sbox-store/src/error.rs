//! Store error types for sbox-store.

use sbox_core::errors::CoreError;
use sbox_core::ids::SuggestionId;
use thiserror::Error;

/// Errors from repository and storage operations.
///
/// A stored value that fails to parse is never reported here: `load()`
/// downgrades it to an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before any mutation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No suggestion carries the requested id.
    #[error("Suggestion not found: {0}")]
    NotFound(SuggestionId),

    /// The status state machine refused the change.
    #[error("Invalid state transition: suggestion {id} from {from} to {to}")]
    InvalidTransition {
        id: SuggestionId,
        from: String,
        to: String,
    },

    /// The admin session is missing or expired.
    #[error("Admin session is not active; run 'sbox admin login' first")]
    SessionExpired,

    /// Reading or writing the backing file failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a value, or reading the storage container itself, failed.
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Whether the error is a user-facing notice rather than a storage fault.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::NotFound(_)
                | Self::InvalidTransition { .. }
                | Self::SessionExpired
        )
    }
}

impl From<CoreError> for StoreError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
        }
    }
}
