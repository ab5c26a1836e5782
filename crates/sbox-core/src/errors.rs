//! Cross-cutting error types for the suggestion box.
//!
//! Storage-specific errors (`StoreError`) live in `sbox-store`. The CLI
//! converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors raised by sbox-core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (empty text, unknown status, malformed id).
    #[error("Validation error: {0}")]
    Validation(String),
}
