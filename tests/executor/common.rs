//! Common test utilities for executor tests

#![allow(dead_code)]

use memkv::{Command, SharedStore, Store, StoreConfig, Value};

/// Create a store with the default configuration
pub fn create_store() -> Store {
    Store::new()
}

/// Create a store that rejects type mismatches
pub fn create_rejecting_store() -> Store {
    let config = StoreConfig {
        type_mismatch: "reject".to_string(),
        ..StoreConfig::default()
    };
    Store::with_config(&config).unwrap()
}

/// Create a shared handle for boundary tests
pub fn create_shared() -> SharedStore {
    SharedStore::new()
}

/// String reply helper
pub fn text(s: &str) -> Value {
    Value::from(s)
}

/// List reply helper
pub fn list(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| s.to_string()).collect())
}

/// Seed the sorted set `{a:3, b:1, c:2}` at `key`
pub fn seed_board(store: &mut Store, key: &str) {
    for (member, score) in [("a", "3"), ("b", "1"), ("c", "2")] {
        store.execute(Command::zadd(key, member, score));
    }
}
