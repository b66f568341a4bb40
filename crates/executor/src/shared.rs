//! Thread-safe store handle.
//!
//! There is no process-wide store. A host creates a [`SharedStore`] and
//! hands clones of it to whoever needs one. All clones see the same map,
//! guarded by one mutex held for the duration of each call.
//!
//! Uses parking_lot::Mutex so a panic in one caller does not poison the
//! store for everyone else.

use std::sync::Arc;

use memkv_core::Value;
use parking_lot::Mutex;

use crate::config::StoreConfig;
use crate::{Command, Result, Store};

/// Cloneable handle to one [`Store`].
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    /// Create a handle to a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle to a new store built from `config`.
    pub fn with_config(config: &StoreConfig) -> Result<Self> {
        Ok(Self::from_store(Store::with_config(config)?))
    }

    /// Wrap an existing store.
    pub fn from_store(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`Store::execute`].
    pub fn execute(&self, cmd: Command) -> Value {
        self.inner.lock().execute(cmd)
    }

    /// See [`Store::try_execute`].
    pub fn try_execute(&self, cmd: Command) -> Result<Value> {
        self.inner.lock().try_execute(cmd)
    }

    /// Run a batch under a single lock acquisition.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Value> {
        self.inner.lock().execute_many(cmds)
    }

    /// Number of keys in the store.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
