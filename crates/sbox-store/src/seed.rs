//! Demo records for an empty dashboard.

use sbox_core::entities::Suggestion;
use sbox_core::enums::SuggestionStatus;
use sbox_core::ids::SuggestionId;

const DAY_MS: i64 = 86_400_000;

/// Three sample suggestions, one per open triage stage, created one, two and
/// three days before `now_ms`.
#[must_use]
pub fn sample_suggestions(now_ms: i64) -> Vec<Suggestion> {
    vec![
        Suggestion {
            id: SuggestionId::new(now_ms - 1_000),
            department: "Faculty of Technoscience".into(),
            tag: "Infrastructure".into(),
            text: "The labs are too small for the number of students we have. \
                   We need larger lab spaces or additional lab sessions."
                .into(),
            status: SuggestionStatus::Implemented.into(),
            admin_response: "Thank you for your suggestion. We have allocated additional \
                             lab space and extended lab hours starting next semester."
                .into(),
            created: now_ms - DAY_MS,
        },
        Suggestion {
            id: SuggestionId::new(now_ms - 2_000),
            department: "Faculty of Science".into(),
            tag: "Academic".into(),
            text: "We need more research materials in the library for advanced physics courses."
                .into(),
            status: SuggestionStatus::InReview.into(),
            admin_response: String::new(),
            created: now_ms - 2 * DAY_MS,
        },
        Suggestion {
            id: SuggestionId::new(now_ms - 3_000),
            department: "Library".into(),
            tag: "Student Welfare".into(),
            text: "Extend library hours during exam periods to accommodate students \
                   who prefer late-night studying."
                .into(),
            status: SuggestionStatus::Pending.into(),
            admin_response: String::new(),
            created: now_ms - 3 * DAY_MS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn samples_cover_three_stages_newest_first() {
        let samples = sample_suggestions(10 * DAY_MS);
        let statuses: Vec<_> = samples.iter().map(|s| s.status.as_str()).collect();
        assert_eq!(statuses, vec!["Implemented", "In Review", "Pending"]);
        assert!(samples.windows(2).all(|w| w[0].created > w[1].created));
        assert!(samples[0].has_response());
        assert!(!samples[1].has_response());
    }

    #[test]
    fn sample_ids_are_unique() {
        let samples = sample_suggestions(10 * DAY_MS);
        let mut ids: Vec<_> = samples.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
