//! Suggestion repository: load, save, migrate, create, respond, re-status, remove.
//!
//! Every mutation is a full read-modify-write of the canonical list. Callers
//! never see a partially written list: the list is serialized once and
//! handed to the adapter as a single value.

use sbox_config::{DEFAULT_CANONICAL_KEY, DEFAULT_LEGACY_PATTERN, StorageConfig};
use sbox_core::entities::{NewSuggestion, Suggestion};
use sbox_core::enums::SuggestionStatus;
use sbox_core::ids::SuggestionId;
use tracing::{debug, info, warn};

use crate::adapter::StorageAdapter;
use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::migrate::{assign_missing_ids, find_legacy_list, parse_list};
use crate::seed::sample_suggestions;
use crate::views::newest_first;

/// Sole gateway between suggestion data and the key-value store.
#[derive(Debug)]
pub struct SuggestionRepo<S, C = SystemClock> {
    storage: S,
    clock: C,
    canonical_key: String,
    legacy_pattern: String,
}

impl<S: StorageAdapter> SuggestionRepo<S, SystemClock> {
    /// Repository over `storage` using the default keys and the wall clock.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }

    /// Repository over `storage` using the keys from `config`.
    #[must_use]
    pub fn from_config(storage: S, config: &StorageConfig) -> Self {
        Self::new(storage).with_keys(&config.canonical_key, &config.legacy_pattern)
    }
}

impl<S: StorageAdapter, C: Clock> SuggestionRepo<S, C> {
    #[must_use]
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            canonical_key: DEFAULT_CANONICAL_KEY.to_string(),
            legacy_pattern: DEFAULT_LEGACY_PATTERN.to_string(),
        }
    }

    /// Override the canonical key and the legacy key pattern.
    #[must_use]
    pub fn with_keys(mut self, canonical_key: &str, legacy_pattern: &str) -> Self {
        canonical_key.clone_into(&mut self.canonical_key);
        legacy_pattern.clone_into(&mut self.legacy_pattern);
        self
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    #[must_use]
    pub fn canonical_key(&self) -> &str {
        &self.canonical_key
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Read the full list.
    ///
    /// A missing or empty canonical value triggers the legacy migration scan.
    /// A canonical value that does not parse yields an empty list. Records
    /// with a missing or repeated id get a fresh one, written back at once.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only when the backend cannot be read, or when a
    /// migrated or repaired list cannot be written back.
    pub fn load(&mut self) -> Result<Vec<Suggestion>, StoreError> {
        let mut list = match self.storage.get_raw(&self.canonical_key)? {
            Some(raw) if !raw.is_empty() => self.parse_canonical(&raw),
            _ => return self.migrate_legacy(),
        };

        let reassigned = assign_missing_ids(&mut list, self.clock.now_ms());
        if reassigned > 0 {
            self.save(&list)?;
            info!(reassigned, "assigned fresh ids to stored suggestions");
        }
        Ok(list)
    }

    /// Replace the canonical list with `list`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn save(&mut self, list: &[Suggestion]) -> Result<(), StoreError> {
        self.storage.set_json(&self.canonical_key, list)
    }

    /// Create a `Pending` suggestion and prepend it to the list.
    ///
    /// The id is the current time in ms, bumped past the highest existing id
    /// so ids stay unique and strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when `text` is blank, before any write.
    pub fn create(
        &mut self,
        department: &str,
        tag: &str,
        text: &str,
    ) -> Result<Suggestion, StoreError> {
        let input = NewSuggestion::new(department, tag, text)?;
        let mut list = self.load()?;

        let now = SuggestionId::new(self.clock.now_ms());
        let id = list
            .iter()
            .map(|s| s.id)
            .max()
            .map_or(now, |highest| now.max(highest.next()));

        let suggestion = Suggestion::from_new(input, id);
        list.insert(0, suggestion.clone());
        self.persist(&list, "create", id)?;
        Ok(suggestion)
    }

    /// Attach an admin response and set the status in one write.
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` when `response` is blank (checked first).
    /// - `StoreError::NotFound` when no record has `id`.
    /// - `StoreError::InvalidTransition` if the state machine refuses `status`.
    pub fn respond(
        &mut self,
        id: SuggestionId,
        response: &str,
        status: SuggestionStatus,
    ) -> Result<Suggestion, StoreError> {
        let response = response.trim();
        if response.is_empty() {
            return Err(StoreError::Validation(
                "admin response must not be empty".into(),
            ));
        }

        self.update_one(id, "respond", |suggestion| {
            ensure_transition(suggestion, status)?;
            response.clone_into(&mut suggestion.admin_response);
            suggestion.status = status.into();
            Ok(())
        })
    }

    /// Set the status alone. The admin response is left as is.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when no record has `id`;
    /// `StoreError::InvalidTransition` if the state machine refuses `status`.
    pub fn set_status(
        &mut self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<Suggestion, StoreError> {
        self.update_one(id, "set_status", |suggestion| {
            ensure_transition(suggestion, status)?;
            suggestion.status = status.into();
            Ok(())
        })
    }

    /// Delete one record, keeping the others in their relative order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no record has `id`.
    pub fn remove(&mut self, id: SuggestionId) -> Result<Suggestion, StoreError> {
        let mut list = self.load()?;
        let index = list
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = list.remove(index);
        self.persist(&list, "remove", id)?;
        Ok(removed)
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    pub fn find_by_id(&mut self, id: SuggestionId) -> Result<Option<Suggestion>, StoreError> {
        Ok(self.load()?.into_iter().find(|s| s.id == id))
    }

    /// Full list sorted by `created`, newest first. Ties keep list order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    pub fn list_newest_first(&mut self) -> Result<Vec<Suggestion>, StoreError> {
        Ok(newest_first(self.load()?))
    }

    /// Replace the whole list with the demo records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn seed_samples(&mut self) -> Result<Vec<Suggestion>, StoreError> {
        let samples = sample_suggestions(self.clock.now_ms());
        self.save(&samples)?;
        info!(count = samples.len(), "seeded sample suggestions");
        Ok(samples)
    }

    fn parse_canonical(&self, raw: &str) -> Vec<Suggestion> {
        match parse_list(raw) {
            Ok(list) => list.unwrap_or_default(),
            Err(error) => {
                warn!(
                    key = %self.canonical_key,
                    %error,
                    "stored suggestions are unreadable; treating the list as empty"
                );
                Vec::new()
            }
        }
    }

    fn migrate_legacy(&mut self) -> Result<Vec<Suggestion>, StoreError> {
        let Some(mut legacy) =
            find_legacy_list(&self.storage, &self.canonical_key, &self.legacy_pattern)?
        else {
            return Ok(Vec::new());
        };

        let reassigned = assign_missing_ids(&mut legacy.suggestions, self.clock.now_ms());
        self.save(&legacy.suggestions)?;
        info!(
            from = %legacy.key,
            to = %self.canonical_key,
            count = legacy.suggestions.len(),
            reassigned,
            "migrated legacy suggestion list"
        );
        Ok(legacy.suggestions)
    }

    fn update_one<F>(
        &mut self,
        id: SuggestionId,
        op: &'static str,
        apply: F,
    ) -> Result<Suggestion, StoreError>
    where
        F: FnOnce(&mut Suggestion) -> Result<(), StoreError>,
    {
        let mut list = self.load()?;
        let record = list
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        apply(record)?;
        let updated = record.clone();
        self.persist(&list, op, id)?;
        Ok(updated)
    }

    fn persist(
        &mut self,
        list: &[Suggestion],
        op: &'static str,
        id: SuggestionId,
    ) -> Result<(), StoreError> {
        self.save(list)?;
        debug!(op, %id, total = list.len(), "suggestions saved");
        Ok(())
    }
}

fn ensure_transition(suggestion: &Suggestion, next: SuggestionStatus) -> Result<(), StoreError> {
    if suggestion.status.can_transition_to(next) {
        Ok(())
    } else {
        Err(StoreError::InvalidTransition {
            id: suggestion.id,
            from: suggestion.status.to_string(),
            to: next.to_string(),
        })
    }
}
