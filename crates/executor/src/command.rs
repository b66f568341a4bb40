//! Operation tags and the Command envelope.
//!
//! A command is `{ op, key, value, old_value }`. The two value slots are
//! overloaded per operation rather than forming a general argument list:
//!
//! | Operation | `value` | `old_value` |
//! |-----------|---------|-------------|
//! | PUT, SET | value to store | unused |
//! | SADD | member | unused |
//! | HSET | field | field value |
//! | HMSET | Hash of fields | unused |
//! | HMGET | field | unused |
//! | ZADD | member | score |
//! | ZINCRBY | increment | member |
//! | ZSCORE | unused | member |
//! | ZREVRANGE | start index | stop index |
//!
//! GET, INCR, EXISTS and HGETALL only use the key.

use std::collections::HashMap;
use std::str::FromStr;

use memkv_core::{Value, NIL};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Finite set of store behaviours selected by a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    /// Store a value of any variant
    Put,
    /// Read a value
    Get,
    /// Increment integer text
    Incr,
    /// Store a value, reply "OK"
    Set,
    /// Add one member to a set
    Sadd,
    /// Check key presence
    Exists,
    /// Read one hash field
    Hmget,
    /// Write one hash field
    Hset,
    /// Write many hash fields
    Hmset,
    /// Read a whole hash
    Hgetall,
    /// Set a member's score
    Zadd,
    /// Add to a member's score
    Zincrby,
    /// Read a member's score
    Zscore,
    /// Ascending range; has no handler
    Zrange,
    /// Descending range by score
    Zrevrange,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 15] = [
        Operation::Put,
        Operation::Get,
        Operation::Incr,
        Operation::Set,
        Operation::Sadd,
        Operation::Exists,
        Operation::Hmget,
        Operation::Hset,
        Operation::Hmset,
        Operation::Hgetall,
        Operation::Zadd,
        Operation::Zincrby,
        Operation::Zscore,
        Operation::Zrange,
        Operation::Zrevrange,
    ];

    /// Upper-case command name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Put => "PUT",
            Operation::Get => "GET",
            Operation::Incr => "INCR",
            Operation::Set => "SET",
            Operation::Sadd => "SADD",
            Operation::Exists => "EXISTS",
            Operation::Hmget => "HMGET",
            Operation::Hset => "HSET",
            Operation::Hmset => "HMSET",
            Operation::Hgetall => "HGETALL",
            Operation::Zadd => "ZADD",
            Operation::Zincrby => "ZINCRBY",
            Operation::Zscore => "ZSCORE",
            Operation::Zrange => "ZRANGE",
            Operation::Zrevrange => "ZREVRANGE",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Case-insensitive lookup by command name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownOperation {
                name: s.to_string(),
            })
    }
}

/// A self-contained operation against one key.
///
/// Commands are pure data and serializable, so a host can ship them as JSON:
///
/// ```text
/// {"op": "HSET", "key": "user:1", "value": {"String": "name"}, "old_value": {"String": "alice"}}
/// ```
///
/// Omitted slots default to [`NIL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Behaviour to run
    pub op: Operation,
    /// Target key
    pub key: String,
    /// First argument slot
    #[serde(default)]
    pub value: Value,
    /// Second argument slot
    #[serde(default)]
    pub old_value: Value,
}

impl Command {
    /// Command with both slots set to nil.
    pub fn new(op: Operation, key: impl Into<String>) -> Self {
        Self {
            op,
            key: key.into(),
            value: NIL,
            old_value: NIL,
        }
    }

    /// Set the `value` slot.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the `old_value` slot.
    pub fn with_old_value(mut self, old_value: impl Into<Value>) -> Self {
        self.old_value = old_value.into();
        self
    }

    /// PUT `value` at `key`.
    pub fn put(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Operation::Put, key).with_value(value)
    }

    /// GET `key`.
    pub fn get(key: impl Into<String>) -> Self {
        Self::new(Operation::Get, key)
    }

    /// INCR the integer text at `key`.
    pub fn incr(key: impl Into<String>) -> Self {
        Self::new(Operation::Incr, key)
    }

    /// SET `key` to `value`.
    pub fn set(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(Operation::Set, key).with_value(value)
    }

    /// SADD one member.
    pub fn sadd(key: impl Into<String>, member: impl Into<String>) -> Self {
        Self::new(Operation::Sadd, key).with_value(Value::String(member.into()))
    }

    /// EXISTS `key`.
    pub fn exists(key: impl Into<String>) -> Self {
        Self::new(Operation::Exists, key)
    }

    /// HMGET a single field.
    pub fn hmget(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(Operation::Hmget, key).with_value(Value::String(field.into()))
    }

    /// HSET one field.
    pub fn hset(
        key: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Hset, key)
            .with_value(Value::String(field.into()))
            .with_old_value(Value::String(value.into()))
    }

    /// HMSET several fields at once.
    pub fn hmset(key: impl Into<String>, fields: HashMap<String, String>) -> Self {
        Self::new(Operation::Hmset, key).with_value(fields)
    }

    /// HGETALL `key`.
    pub fn hgetall(key: impl Into<String>) -> Self {
        Self::new(Operation::Hgetall, key)
    }

    /// ZADD `member` with score text `score`.
    pub fn zadd(
        key: impl Into<String>,
        member: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Zadd, key)
            .with_value(Value::String(member.into()))
            .with_old_value(Value::String(score.into()))
    }

    /// Note the slot order: increment first, member second.
    pub fn zincrby(
        key: impl Into<String>,
        increment: impl Into<String>,
        member: impl Into<String>,
    ) -> Self {
        Self::new(Operation::Zincrby, key)
            .with_value(Value::String(increment.into()))
            .with_old_value(Value::String(member.into()))
    }

    /// ZSCORE of `member`.
    pub fn zscore(key: impl Into<String>, member: impl Into<String>) -> Self {
        Self::new(Operation::Zscore, key).with_old_value(Value::String(member.into()))
    }

    /// ZREVRANGE over the inclusive index range.
    pub fn zrevrange(key: impl Into<String>, start: i64, stop: i64) -> Self {
        Self::new(Operation::Zrevrange, key)
            .with_value(start.to_string())
            .with_old_value(stop.to_string())
    }
}
