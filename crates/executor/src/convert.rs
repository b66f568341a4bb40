//! JSON conversion for host values.
//!
//! Hosts that talk JSON hand values in and get replies back through these
//! two functions. Input is sniffed in a fixed order:
//!
//! | JSON | Value |
//! |------|-------|
//! | string | String |
//! | array of strings | List |
//! | object of strings | Hash |
//! | anything else | NIL |
//!
//! JSON has no set type, so a Set is only ever produced by the store and
//! goes back out as a sorted array.

use std::collections::HashMap;

use memkv_core::{Value, NIL};
use serde_json::Value as JsonValue;

use crate::{Error, Result};

/// Convert a JSON value into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an array or object with a
/// non-string member.
pub fn from_json(json: &JsonValue) -> Result<Value> {
    match json {
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| string_member(item, "array element"))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        JsonValue::Object(map) => map
            .iter()
            .map(|(k, v)| Ok((k.clone(), string_member(v, "object value")?)))
            .collect::<Result<HashMap<String, String>>>()
            .map(Value::Hash),
        _ => Ok(NIL),
    }
}

/// Convert a [`Value`] into JSON.
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::String(s) => JsonValue::String(s.clone()),
        Value::List(items) => JsonValue::Array(items.iter().cloned().map(JsonValue::String).collect()),
        Value::Set(members) => {
            let mut sorted: Vec<&String> = members.iter().collect();
            sorted.sort();
            JsonValue::Array(sorted.into_iter().cloned().map(JsonValue::String).collect())
        }
        Value::Hash(fields) => JsonValue::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
                .collect(),
        ),
    }
}

fn string_member(json: &JsonValue, what: &str) -> Result<String> {
    match json {
        JsonValue::String(s) => Ok(s.clone()),
        other => Err(Error::InvalidInput {
            reason: format!("{} must be a string, got {}", what, other),
        }),
    }
}
