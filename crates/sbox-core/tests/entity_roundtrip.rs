//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use sbox_core::entities::*;
use sbox_core::enums::*;
use sbox_core::ids::SuggestionId;
use sbox_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample(id: i64, status: &str, response: &str) -> Suggestion {
    Suggestion {
        id: SuggestionId::new(id),
        department: "Library".into(),
        tag: "Facilities".into(),
        text: "Extend hours during exams".into(),
        status: Status::new(status),
        admin_response: response.into(),
        created: id,
    }
}

roundtrip_and_validate!(
    suggestion_pending_roundtrip,
    Suggestion,
    sample(1_700_000_000_000, "Pending", "")
);

roundtrip_and_validate!(
    suggestion_with_response_roundtrip,
    Suggestion,
    sample(1_700_000_000_001, "Implemented", "Done")
);

roundtrip_and_validate!(
    suggestion_odd_case_status_roundtrip,
    Suggestion,
    sample(1_700_000_000_002, "in review", "")
);

roundtrip_and_validate!(
    suggestion_list_roundtrip,
    Vec<Suggestion>,
    vec![
        sample(3, "Rejected", "Out of budget"),
        sample(2, "In Review", ""),
        sample(1, "Pending", ""),
    ]
);

roundtrip_and_validate!(
    feed_response_roundtrip,
    FeedResponse,
    FeedResponse {
        total: 1,
        suggestions: vec![sample(1, "Pending", "")],
        empty_state: None,
    }
);

roundtrip_and_validate!(
    empty_feed_response_roundtrip,
    FeedResponse,
    FeedResponse {
        total: 0,
        suggestions: vec![],
        empty_state: Some(EMPTY_FEED_MESSAGE.into()),
    }
);

roundtrip_and_validate!(
    stats_roundtrip,
    SuggestionStats,
    SuggestionStats {
        total: 3,
        implemented: 1,
        departments: 2,
    }
);

roundtrip_and_validate!(
    session_response_roundtrip,
    SessionResponse,
    SessionResponse {
        authenticated: true,
        login_time: Some(1_700_000_000_000),
        expires_at: Some(1_700_086_400_000),
    }
);

roundtrip_and_validate!(
    delete_response_roundtrip,
    DeleteResponse,
    DeleteResponse {
        deleted: sample(9, "Rejected", ""),
        remaining: 0,
    }
);

#[test]
fn persisted_field_names_match_storage_layout() {
    let value = serde_json::to_value(sample(1, "Pending", "")).unwrap();
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "adminResponse",
            "created",
            "department",
            "id",
            "status",
            "tag",
            "text"
        ]
    );
}

#[test]
fn legacy_string_ids_normalize_on_read() {
    let list: Vec<Suggestion> =
        serde_json::from_str(r#"[{"id":"12","text":"a","created":12}]"#).unwrap();
    assert_eq!(list[0].id, SuggestionId::new(12));
}
