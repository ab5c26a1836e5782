//! Key-value storage adapters.
//!
//! The suggestion box persists everything as string values under string keys,
//! the same shape as a browser's `localStorage`. [`StorageAdapter`] is that
//! contract; [`MemoryStorage`] and [`FileStorage`] are the two backends.
//!
//! Key enumeration order is part of the contract: legacy migration adopts
//! the *first* matching key, so backends must enumerate deterministically.
//! Both backends enumerate in ascending key order.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;

use crate::error::StoreError;

/// Host key-value store.
pub trait StorageAdapter {
    /// Read the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// All keys, in the backend's enumeration order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Serialize `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}
