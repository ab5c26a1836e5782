//! Read-side projections for the public feed and the admin grid.
//!
//! Both views sort the same way: `created` descending, stable on ties.

use std::collections::BTreeSet;

use serde::Serialize;

use sbox_core::entities::Suggestion;
use sbox_core::enums::SuggestionStatus;
use sbox_core::ids::SuggestionId;
use sbox_core::responses::{EMPTY_FEED_MESSAGE, FeedResponse, SuggestionStats};

/// Stable sort by `created`, newest first.
#[must_use]
pub fn newest_first(mut list: Vec<Suggestion>) -> Vec<Suggestion> {
    list.sort_by(|a, b| b.created.cmp(&a.created));
    list
}

/// Public feed: the `limit` newest records, plus the empty-state message when
/// the store holds nothing.
#[must_use]
pub fn public_feed(list: Vec<Suggestion>, limit: usize) -> FeedResponse {
    let total = count(list.len());
    let empty_state = list.is_empty().then(|| EMPTY_FEED_MESSAGE.to_string());
    let mut suggestions = newest_first(list);
    suggestions.truncate(limit);
    FeedResponse {
        total,
        suggestions,
        empty_state,
    }
}

/// One row of the admin grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRow {
    pub id: SuggestionId,
    pub department: String,
    pub tag: String,
    pub text: String,
    pub status: String,
    /// Display key derived from `status`, e.g. `in-review`.
    pub status_key: String,
    pub admin_response: String,
    pub has_response: bool,
    pub created: i64,
}

impl From<&Suggestion> for AdminRow {
    fn from(s: &Suggestion) -> Self {
        Self {
            id: s.id,
            department: s.department_label().to_string(),
            tag: s.tag_label().to_string(),
            text: s.text.clone(),
            status: s.status.to_string(),
            status_key: s.status.class_key(),
            admin_response: s.admin_response.clone(),
            has_response: s.has_response(),
            created: s.created,
        }
    }
}

/// Admin grid: every record, newest first.
#[must_use]
pub fn admin_grid(list: Vec<Suggestion>) -> Vec<AdminRow> {
    newest_first(list).iter().map(AdminRow::from).collect()
}

/// Keep records whose status matches `label` case-insensitively.
///
/// Vocabulary labels also match their hyphen and underscore spellings
/// (`in-review`); any other label is compared verbatim, so unknown legacy
/// statuses can still be filtered.
#[must_use]
pub fn filter_by_status(list: Vec<Suggestion>, label: &str) -> Vec<Suggestion> {
    match label.parse::<SuggestionStatus>() {
        Ok(status) => list.into_iter().filter(|s| s.status.is(status)).collect(),
        Err(_) => list.into_iter().filter(|s| s.status.matches(label)).collect(),
    }
}

/// Dashboard counters.
#[must_use]
pub fn stats(list: &[Suggestion]) -> SuggestionStats {
    let implemented = list
        .iter()
        .filter(|s| s.status.is(SuggestionStatus::Implemented) || s.status.matches("resolved"))
        .count();
    let departments = list
        .iter()
        .map(Suggestion::department_label)
        .collect::<BTreeSet<_>>()
        .len();

    SuggestionStats {
        total: count(list.len()),
        implemented: count(implemented),
        departments: count(departments),
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
