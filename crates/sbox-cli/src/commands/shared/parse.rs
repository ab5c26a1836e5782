use sbox_core::enums::SuggestionStatus;
use sbox_core::ids::SuggestionId;

/// Parse a status label; `in-review`, `in_review` and `In Review` are equivalent.
pub fn parse_status(raw: &str) -> anyhow::Result<SuggestionStatus> {
    raw.parse::<SuggestionStatus>()
        .map_err(|error| anyhow::anyhow!("invalid status '{raw}': {error}"))
}

pub fn parse_id(raw: &str) -> anyhow::Result<SuggestionId> {
    raw.parse::<SuggestionId>()
        .map_err(|error| anyhow::anyhow!("invalid id: {error}"))
}

/// Cut `text` to at most `max_chars` characters. Returns whether it was cut.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (text[..byte_index].to_string(), true),
        None => (text.to_string(), false),
    }
}
