//! The Store - single entry point to the key space.
//!
//! The Store owns the key space and routes every [`Command`] to the handler
//! for its [`Operation`]. `execute` never fails: anything a handler reports
//! as an error is logged and answered with [`NIL`]. `try_execute` exposes
//! those errors to callers that want them.

use memkv_core::{Value, NIL};
use tracing::warn;

use crate::config::StoreConfig;
use crate::handlers::{hash, set, string, zset};
use crate::keyspace::Keyspace;
use crate::{Command, Operation, Result};

/// A single-threaded key -> value store.
///
/// Every `execute` call runs to completion and is atomic with respect to
/// the map. Share a store across threads through
/// [`SharedStore`](crate::SharedStore).
///
/// # Example
///
/// ```ignore
/// use memkv_executor::{Command, Store, Value};
///
/// let mut store = Store::new();
/// store.execute(Command::hset("user:1", "name", "alice"));
///
/// let reply = store.execute(Command::hmget("user:1", "name"));
/// assert_eq!(reply, Value::List(vec!["alice".into()]));
/// ```
#[derive(Debug, Default)]
pub struct Store {
    keyspace: Keyspace,
}

impl Store {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store from a validated configuration.
    pub fn with_config(config: &StoreConfig) -> Result<Self> {
        let policy = config.mismatch_policy()?;
        Ok(Self {
            keyspace: Keyspace::new(policy, config.initial_capacity.unwrap_or(0)),
        })
    }

    /// Execute a single command.
    ///
    /// Errors (only possible under the `reject` mismatch policy) are logged
    /// and reported as [`NIL`].
    pub fn execute(&mut self, cmd: Command) -> Value {
        let op = cmd.op;
        match self.try_execute(cmd) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(target: "memkv::executor", op = op.name(), error = %e, "command failed");
                NIL
            }
        }
    }

    /// Execute a single command, surfacing handler errors.
    pub fn try_execute(&mut self, cmd: Command) -> Result<Value> {
        let Command {
            op,
            key,
            value,
            old_value,
        } = cmd;
        let ks = &mut self.keyspace;

        match op {
            Operation::Put => string::put(ks, key, value),
            Operation::Get => string::get(ks, key),
            Operation::Set => string::set(ks, key, value),
            Operation::Exists => string::exists(ks, key),
            Operation::Incr => string::incr(ks, key),

            Operation::Sadd => set::sadd(ks, key, value),

            Operation::Hset => hash::hset(ks, key, value, old_value),
            Operation::Hmset => hash::hmset(ks, key, value),
            Operation::Hmget => hash::hmget(ks, key, value),
            Operation::Hgetall => hash::hgetall(ks, key),

            Operation::Zadd => zset::zadd(ks, key, value, old_value),
            Operation::Zincrby => zset::zincrby(ks, key, value, old_value),
            Operation::Zscore => zset::zscore(ks, key, old_value),
            Operation::Zrevrange => zset::zrevrange(ks, key, value, old_value),

            // In the command set, but no ascending-range semantics are defined.
            Operation::Zrange => {
                warn!(target: "memkv::executor", op = op.name(), "operation not supported");
                Ok(NIL)
            }
        }
    }

    /// Execute commands in order, one reply per command.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Value> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keyspace.len()
    }

    /// True if no key has been written yet.
    pub fn is_empty(&self) -> bool {
        self.keyspace.is_empty()
    }

    /// True if `key` has ever been written.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keyspace.contains_key(key)
    }
}
