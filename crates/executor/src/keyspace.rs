//! The key -> value map every handler operates on.
//!
//! Typed writes go through [`Keyspace::string_mut`], [`Keyspace::set_mut`]
//! and [`Keyspace::hash_mut`]. Each one creates an empty value of the
//! required type for an absent key, and applies the [`MismatchPolicy`] when
//! the key holds another type. Reads never migrate anything.

use std::collections::{HashMap, HashSet};

use memkv_core::{Value, ValueType};
use tracing::{debug, warn};

use crate::config::MismatchPolicy;
use crate::{Error, Result};

/// Owned key space. Entries are created on first write and never removed.
#[derive(Debug, Default)]
pub struct Keyspace {
    data: HashMap<String, Value>,
    policy: MismatchPolicy,
}

fn empty_of(ty: ValueType) -> Value {
    match ty {
        ValueType::String => Value::String(String::new()),
        ValueType::List => Value::List(Vec::new()),
        ValueType::Set => Value::Set(HashSet::new()),
        ValueType::Hash => Value::Hash(HashMap::new()),
    }
}

impl Keyspace {
    pub fn new(policy: MismatchPolicy, capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
            policy,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Replace the value at `key` wholesale, whatever its type.
    pub fn insert(&mut self, key: String, value: Value) {
        self.data.insert(key, value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Hash at `key`, or `None` if absent or of another type.
    pub fn hash(&self, key: &str) -> Option<&HashMap<String, String>> {
        self.data.get(key).and_then(Value::as_hash)
    }

    pub fn string_mut(&mut self, key: &str) -> Result<&mut String> {
        match self.typed_entry(key, ValueType::String)? {
            Value::String(s) => Ok(s),
            other => Err(mismatch_after_prepare(key, ValueType::String, other)),
        }
    }

    pub fn set_mut(&mut self, key: &str) -> Result<&mut HashSet<String>> {
        match self.typed_entry(key, ValueType::Set)? {
            Value::Set(s) => Ok(s),
            other => Err(mismatch_after_prepare(key, ValueType::Set, other)),
        }
    }

    pub fn hash_mut(&mut self, key: &str) -> Result<&mut HashMap<String, String>> {
        match self.typed_entry(key, ValueType::Hash)? {
            Value::Hash(h) => Ok(h),
            other => Err(mismatch_after_prepare(key, ValueType::Hash, other)),
        }
    }

    fn typed_entry(&mut self, key: &str, expected: ValueType) -> Result<&mut Value> {
        let policy = self.policy;
        let slot = self
            .data
            .entry(key.to_string())
            .or_insert_with(|| empty_of(expected));
        let actual = slot.value_type();
        if actual != expected {
            match policy {
                MismatchPolicy::Migrate => {
                    debug!(
                        target: "memkv::keyspace",
                        key,
                        from = %actual,
                        to = %expected,
                        "re-initialising key"
                    );
                    *slot = empty_of(expected);
                }
                MismatchPolicy::Reject => {
                    warn!(
                        target: "memkv::keyspace",
                        key,
                        expected = %expected,
                        actual = %actual,
                        "rejecting write to key of another type"
                    );
                    return Err(Error::WrongType {
                        key: key.to_string(),
                        expected: expected.to_string(),
                        actual: actual.to_string(),
                    });
                }
            }
        }
        Ok(slot)
    }
}

fn mismatch_after_prepare(key: &str, expected: ValueType, found: &Value) -> Error {
    Error::Internal {
        reason: format!(
            "key '{}' holds {} after preparing it as {}",
            key,
            found.value_type(),
            expected
        ),
    }
}
