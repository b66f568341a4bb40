//! String and whole-value command handlers.

use memkv_core::{Value, NIL};
use tracing::debug;

use super::parse_int;
use crate::keyspace::Keyspace;
use crate::Result;

/// Handle PUT: store any value, reply with the stored value.
pub fn put(ks: &mut Keyspace, key: String, value: Value) -> Result<Value> {
    ks.insert(key, value.clone());
    Ok(value)
}

/// Handle GET.
pub fn get(ks: &Keyspace, key: String) -> Result<Value> {
    match ks.get(&key) {
        Some(v) => Ok(v.clone()),
        None => {
            debug!(target: "memkv::executor", key = %key, "key not found");
            Ok(NIL)
        }
    }
}

/// Handle SET: same mutation as PUT, replies "OK".
pub fn set(ks: &mut Keyspace, key: String, value: Value) -> Result<Value> {
    ks.insert(key, value);
    Ok(Value::from("OK"))
}

/// Handle EXISTS: "1" or "0".
pub fn exists(ks: &Keyspace, key: String) -> Result<Value> {
    let flag = if ks.contains_key(&key) { "1" } else { "0" };
    Ok(Value::from(flag))
}

/// Handle INCR.
///
/// Absent, empty or non-String values count as 0. Text that does not parse
/// as an integer, or whose increment would overflow, is reset to "0" and
/// "0" is returned without incrementing.
pub fn incr(ks: &mut Keyspace, key: String) -> Result<Value> {
    let slot = ks.string_mut(&key)?;
    let next = if slot.is_empty() {
        Some(1)
    } else {
        parse_int(slot).and_then(|n| n.checked_add(1))
    };
    match next {
        Some(n) => *slot = n.to_string(),
        None => {
            debug!(target: "memkv::executor", key = %key, text = %slot, "not an integer, resetting to 0");
            *slot = "0".to_string();
        }
    }
    Ok(Value::String(slot.clone()))
}
