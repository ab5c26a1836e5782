//! Serde helpers for reading stored suggestion records.
//!
//! Stored lists come from older page versions and hand edits. A present
//! `null` reads the same as a missing field, and numeric fields accept
//! integers, whole floats and numeric strings. Use with
//! `#[serde(default = "...", deserialize_with = "lenient::...")]`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::entities::{DEFAULT_DEPARTMENT, DEFAULT_TAG};
use crate::ids::SuggestionId;

/// Any JSON value that might hold a millisecond count.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawMillis {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawMillis {
    /// Exact integer value, or `None` for fractions, garbage, and `null`.
    pub(crate) fn whole(&self) -> Option<i64> {
        match self {
            Self::Int(raw) => Some(*raw),
            Self::Float(raw) => whole_float(*raw),
            Self::Text(raw) => {
                let raw = raw.trim();
                raw.parse::<i64>()
                    .ok()
                    .or_else(|| raw.parse::<f64>().ok().and_then(whole_float))
            }
            Self::Other(_) => None,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn whole_float(raw: f64) -> Option<i64> {
    (raw.is_finite() && raw.fract() == 0.0).then(|| raw as i64)
}

/// `null` reads as `T::default()`.
///
/// # Errors
///
/// Fails only when the value is present and not a `T`.
pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// `null` reads as `General`.
///
/// # Errors
///
/// Fails when the value is present and not a string.
pub fn department<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()))
}

/// `null` reads as `Other`.
///
/// # Errors
///
/// Fails when the value is present and not a string.
pub fn tag<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_else(|| DEFAULT_TAG.to_string()))
}

/// Record id. Anything that is not a whole number reads as the unassigned
/// id `0`; the repository hands out a fresh one on load.
///
/// # Errors
///
/// Never fails for well-formed JSON.
pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<SuggestionId, D::Error> {
    Ok(RawMillis::deserialize(d)?
        .whole()
        .map(SuggestionId::new)
        .unwrap_or_default())
}

/// Millisecond timestamp. Anything that is not a whole number reads as `0`.
///
/// # Errors
///
/// Never fails for well-formed JSON.
pub fn millis<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(RawMillis::deserialize(d)?.whole().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "millis")]
        at: i64,
        #[serde(default, deserialize_with = "null_as_default")]
        note: String,
    }

    fn at(json: &str) -> i64 {
        serde_json::from_str::<Stamped>(json).unwrap().at
    }

    #[rstest]
    #[case(r#"{"at":1700000000000}"#, 1_700_000_000_000)]
    #[case(r#"{"at":42.0}"#, 42)]
    #[case(r#"{"at":"1700000000000"}"#, 1_700_000_000_000)]
    #[case(r#"{"at":" 17 "}"#, 17)]
    #[case(r#"{"at":null}"#, 0)]
    #[case(r#"{"at":"yesterday"}"#, 0)]
    #[case(r#"{"at":4.5}"#, 0)]
    #[case(r#"{"at":true}"#, 0)]
    #[case(r#"{}"#, 0)]
    fn millis_normalization(#[case] json: &str, #[case] expected: i64) {
        assert_eq!(at(json), expected);
    }

    #[test]
    fn null_string_reads_as_empty() {
        let p: Stamped = serde_json::from_str(r#"{"note":null}"#).unwrap();
        assert_eq!(p.note, "");
    }

    #[test]
    fn wrong_type_still_fails() {
        assert!(serde_json::from_str::<Stamped>(r#"{"note":5}"#).is_err());
    }
}
