//! One-time adoption of suggestion lists stored under legacy keys, and the
//! per-record list reader shared with the canonical key.
//!
//! An empty legacy value counts as an empty list and is adopted, the same as
//! `[]`.

use std::collections::HashSet;

use sbox_core::entities::Suggestion;
use sbox_core::ids::SuggestionId;
use tracing::{debug, warn};

use crate::adapter::StorageAdapter;
use crate::error::StoreError;

/// A legacy list found by [`find_legacy_list`].
#[derive(Debug)]
pub struct LegacyList {
    pub key: String,
    pub suggestions: Vec<Suggestion>,
}

/// Whether `key` names a legacy suggestion list.
#[must_use]
pub fn is_legacy_key(key: &str, canonical_key: &str, pattern: &str) -> bool {
    key != canonical_key && key.to_lowercase().contains(&pattern.to_lowercase())
}

/// Parse a stored JSON array of suggestions one element at a time.
///
/// `Ok(None)` for JSON `null`. Elements that are not suggestion records
/// (scalars, nested arrays, wrongly typed fields) are dropped with a warning
/// so one bad record never hides the rest.
///
/// # Errors
///
/// Returns the parse error when `raw` is not JSON or not an array.
pub fn parse_list(raw: &str) -> Result<Option<Vec<Suggestion>>, serde_json::Error> {
    let Some(values) = serde_json::from_str::<Option<Vec<serde_json::Value>>>(raw)? else {
        return Ok(None);
    };

    let total = values.len();
    let suggestions: Vec<Suggestion> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(suggestion) => Some(suggestion),
            Err(error) => {
                warn!(index, %error, "dropping unreadable suggestion record");
                None
            }
        })
        .collect();
    if suggestions.len() < total {
        warn!(
            kept = suggestions.len(),
            dropped = total - suggestions.len(),
            "stored suggestion list had unreadable records"
        );
    }
    Ok(Some(suggestions))
}

/// Give every record with an unassigned (`<= 0`) or repeated id a fresh one,
/// counting up from `max(now_ms, highest id + 1)`. The first holder of an id
/// keeps it. Returns how many ids were reassigned.
pub fn assign_missing_ids(list: &mut [Suggestion], now_ms: i64) -> usize {
    let mut next = list
        .iter()
        .map(|s| s.id)
        .max()
        .map_or(SuggestionId::new(now_ms), |highest| {
            SuggestionId::new(now_ms).max(highest.next())
        });
    let mut seen = HashSet::with_capacity(list.len());
    let mut reassigned = 0;

    for suggestion in list {
        if suggestion.id.get() > 0 && seen.insert(suggestion.id) {
            continue;
        }
        debug!(old = %suggestion.id, new = %next, "assigning fresh suggestion id");
        suggestion.id = next;
        seen.insert(next);
        next = next.next();
        reassigned += 1;
    }
    reassigned
}

/// Scan keys in enumeration order and return the first legacy key whose
/// value is a suggestion list.
///
/// Values that are not JSON arrays are skipped; an empty value is an empty
/// list.
///
/// # Errors
///
/// Returns `StoreError` only when the backend itself cannot be read.
pub fn find_legacy_list<S: StorageAdapter>(
    storage: &S,
    canonical_key: &str,
    pattern: &str,
) -> Result<Option<LegacyList>, StoreError> {
    for key in storage.keys()? {
        if !is_legacy_key(&key, canonical_key, pattern) {
            continue;
        }
        let Some(raw) = storage.get_raw(&key)? else {
            continue;
        };
        if raw.trim().is_empty() {
            return Ok(Some(LegacyList {
                key,
                suggestions: Vec::new(),
            }));
        }
        match parse_list(&raw) {
            Ok(Some(suggestions)) => return Ok(Some(LegacyList { key, suggestions })),
            Ok(None) => debug!(%key, "skipping legacy key holding null"),
            Err(error) => {
                debug!(%key, %error, "skipping legacy key that is not a suggestion list");
            }
        }
    }
    Ok(None)
}
