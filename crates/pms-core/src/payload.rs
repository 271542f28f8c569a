//! Lenient JSON parsing for PMS payloads.
//!
//! PMS payloads are untrusted. Anything that is not usable JSON is treated as
//! empty so the caller falls through to its missing-field handling.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::PmsError;

/// Parse a payload into a JSON object.
///
/// Empty input, invalid JSON, and JSON that is not an object all yield an
/// empty map.
pub fn clean_json_object(payload: &[u8]) -> Map<String, Value> {
    match parse_value(payload) {
        Some(Value::Object(map)) => map,
        Some(other) => {
            warn!(kind = json_kind(&other), "Payload is not a JSON object");
            Map::new()
        }
        None => Map::new(),
    }
}

/// Parse a payload into a JSON array; anything else yields an empty list.
pub fn clean_json_array(payload: &[u8]) -> Vec<Value> {
    match parse_value(payload) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!(kind = json_kind(&other), "Payload is not a JSON array");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Clean a payload and deserialize it into `T`.
///
/// Malformed JSON becomes an empty object first, so `T` should use optional
/// fields. A type mismatch on a present field is a [`PmsError::MalformedPayload`].
pub fn parse_lenient<T: DeserializeOwned>(payload: &[u8]) -> Result<T, PmsError> {
    from_map(clean_json_object(payload))
}

/// Deserialize an already cleaned map into `T`.
pub fn from_map<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, PmsError> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| PmsError::MalformedPayload(e.to_string()))
}

fn parse_value(payload: &[u8]) -> Option<Value> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        warn!("Empty payload");
        return None;
    }

    match serde_json::from_slice(payload) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "Error decoding JSON payload");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
