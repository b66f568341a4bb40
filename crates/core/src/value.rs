//! Value types for memkv
//!
//! This module defines:
//! - Value: Tagged union stored per key and returned by every operation
//! - ValueType: The variant tag of a Value
//! - NIL: The canonical "no result" sentinel
//!
//! ## Value Model
//!
//! The Value enum has exactly 4 variants:
//! - String, List, Set, Hash
//!
//! There is no dedicated null variant. The nil sentinel is a `String` with
//! empty text, so a present empty string and an absent key read the same.
//! Callers that need to tell them apart must not store empty strings.
//!
//! A `Hash` doubles as the sorted-set representation: member -> score text.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The canonical "no result" / "missing" sentinel.
pub const NIL: Value = Value::String(String::new());

/// Variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    /// Text
    String,
    /// Ordered sequence of strings
    List,
    /// Unordered set of unique strings
    Set,
    /// String -> string mapping
    Hash,
}

impl ValueType {
    /// Lowercase name, as the remote server's TYPE command reports it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::List => "list",
            ValueType::Set => "set",
            ValueType::Hash => "hash",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value held by a key.
///
/// Exactly one variant is active; the payload always matches the tag.
/// `Default` is [`NIL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 text
    String(String),
    /// Strings in insertion order
    List(Vec<String>),
    /// Unique strings, no order guarantee
    Set(HashSet<String>),
    /// Field -> value mapping with unique fields
    Hash(HashMap<String, String>),
}

impl Default for Value {
    fn default() -> Self {
        NIL
    }
}

impl Value {
    /// Create a String value.
    pub fn new_string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a List value.
    pub fn new_list(items: Vec<String>) -> Self {
        Value::List(items)
    }

    /// Create a Set value.
    pub fn new_set(members: HashSet<String>) -> Self {
        Value::Set(members)
    }

    /// Create a Hash value.
    pub fn new_hash(fields: HashMap<String, String>) -> Self {
        Value::Hash(fields)
    }

    /// True iff this is a String with empty text.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    /// Get the variant tag
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::List(_) => ValueType::List,
            Value::Set(_) => ValueType::Set,
            Value::Hash(_) => ValueType::Hash,
        }
    }

    /// Text payload of a String value; empty for every other variant.
    ///
    /// Command slots are read through this, so a slot carrying a
    /// collection reads as the empty string.
    pub fn text(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => "",
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[String] if this is a List value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Get as &HashSet if this is a Set value
    pub fn as_set(&self) -> Option<&HashSet<String>> {
        match self {
            Value::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &HashMap if this is a Hash value
    pub fn as_hash(&self) -> Option<&HashMap<String, String>> {
        match self {
            Value::Hash(h) => Some(h),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(l: Vec<String>) -> Self {
        Value::List(l)
    }
}

impl From<HashSet<String>> for Value {
    fn from(s: HashSet<String>) -> Self {
        Value::Set(s)
    }
}

impl From<HashMap<String, String>> for Value {
    fn from(h: HashMap<String, String>) -> Self {
        Value::Hash(h)
    }
}
