//! Hash command handlers.

use std::collections::HashMap;

use memkv_core::Value;

use crate::keyspace::Keyspace;
use crate::Result;

/// Handle HSET: "1" if the field is new, "0" if it was overwritten.
pub fn hset(ks: &mut Keyspace, key: String, field: Value, value: Value) -> Result<Value> {
    let hash = ks.hash_mut(&key)?;
    let previous = hash.insert(field.text().to_string(), value.text().to_string());
    let flag = if previous.is_none() { "1" } else { "0" };
    Ok(Value::from(flag))
}

/// Handle HMSET: merge fields in, reply with how many were new.
///
/// A `fields` slot that is not a Hash merges nothing, but the key is still
/// prepared as a Hash.
pub fn hmset(ks: &mut Keyspace, key: String, fields: Value) -> Result<Value> {
    let hash = ks.hash_mut(&key)?;
    let mut added = 0usize;
    if let Value::Hash(fields) = fields {
        for (field, value) in fields {
            if hash.insert(field, value).is_none() {
                added += 1;
            }
        }
    }
    Ok(Value::String(added.to_string()))
}

/// Handle HMGET for a single field.
///
/// Replies `[value]`, `[""]` when the field is missing, and `[]` when the
/// key is absent or not a Hash.
pub fn hmget(ks: &Keyspace, key: String, field: Value) -> Result<Value> {
    let reply = match ks.hash(&key) {
        Some(hash) => vec![hash.get(field.text()).cloned().unwrap_or_default()],
        None => Vec::new(),
    };
    Ok(Value::List(reply))
}

/// Handle HGETALL: the whole Hash, or an empty one.
pub fn hgetall(ks: &Keyspace, key: String) -> Result<Value> {
    let hash = ks.hash(&key).cloned().unwrap_or_else(HashMap::new);
    Ok(Value::Hash(hash))
}
