//! Participant codec.
//!
//! A project's participants are an ordered list of team-member names stored
//! in a single text column as a JSON array. Reads are tolerant: anything that
//! does not decode to a list of strings is treated as an empty list, so rows
//! written by older clients never fail a listing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Stored value for a project without participants.
pub const EMPTY_ENCODED: &str = "[]";

/// Encode participants for storage. Order and duplicates are preserved.
pub fn encode(participants: &[String]) -> String {
    serde_json::to_string(participants).unwrap_or_else(|_| EMPTY_ENCODED.to_string())
}

/// Decode the stored text back into a list.
///
/// `None`, blank text and malformed text all yield an empty list.
pub fn decode(raw: Option<&str>) -> Vec<String> {
    match raw.map(str::trim) {
        None | Some("") => Vec::new(),
        Some(text) => serde_json::from_str(text).unwrap_or_default(),
    }
}

/// Decode an arbitrary JSON value.
///
/// Arrays of strings are taken as-is, strings are treated as encoded text,
/// everything else is an empty list.
pub fn decode_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(_) => Vec::<String>::deserialize(value).unwrap_or_default(),
        Value::String(text) => decode(Some(text.as_str())),
        _ => Vec::new(),
    }
}

/// Serde adapter for request bodies: accepts a list, an encoded string or
/// `null`. Use with `#[serde(default, deserialize_with = "...")]`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(decode_value).unwrap_or_default())
}
