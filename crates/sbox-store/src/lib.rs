//! # sbox-store
//!
//! Persistence for the suggestion box: key-value storage adapters, the
//! suggestion repository with legacy-key migration, read-side view
//! projections, the review/delete flow contexts, and the admin session gate.
//!
//! All state lives under string keys of a [`StorageAdapter`]. The repository
//! owns one canonical key holding a JSON array of suggestions; every mutation
//! is a full read-modify-write of that array.
//!
//! ```
//! use sbox_store::{MemoryStorage, SuggestionRepo};
//!
//! let mut repo = SuggestionRepo::new(MemoryStorage::new());
//! let created = repo.create("Library", "Facilities", "Extend hours").unwrap();
//! assert_eq!(repo.list_newest_first().unwrap()[0].id, created.id);
//! ```

pub mod adapter;
pub mod clock;
pub mod error;
pub mod migrate;
pub mod repo;
pub mod review;
pub mod seed;
pub mod session;
pub mod views;

mod test_support;

pub use adapter::{FileStorage, MemoryStorage, StorageAdapter};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
pub use repo::SuggestionRepo;
pub use review::{DeleteConfirmation, ResponseDraft};
pub use session::{SessionGate, StorageSession};
