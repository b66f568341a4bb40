//! # memkv Executor
//!
//! Command dispatch for memkv, an in-process data structure store with a
//! subset of a well-known key-value server's command surface.
//!
//! This crate provides:
//! - [`Store`] - owns the key space, dispatches [`Command`]s
//! - [`SharedStore`] - cloneable, mutex-guarded handle to one store
//! - [`Command`]/[`Operation`] - the instruction set
//! - [`StoreConfig`] - `memkv.toml` configuration
//! - [`request`] / [`convert`] - boundary helpers for host bindings
//!
//! ## Quick Start
//!
//! ```text
//! use memkv_executor::{Command, Store};
//!
//! let mut store = Store::new();
//! store.execute(Command::incr("total_users"));           // "1"
//! store.execute(Command::zadd("room:1", "hello", "10"));  // "1"
//! store.execute(Command::zrevrange("room:1", 0, -1));     // ["hello"]
//! ```
//!
//! ## Commands
//!
//! | Type | Operations |
//! |------|------------|
//! | any / String | PUT, GET, SET, EXISTS, INCR |
//! | Set | SADD |
//! | Hash | HSET, HMSET, HMGET, HGETALL |
//! | Sorted set (Hash of scores) | ZADD, ZINCRBY, ZSCORE, ZREVRANGE |
//!
//! ZRANGE is part of the operation set but unsupported: it logs a warning
//! and replies nil.

#![warn(missing_docs)]

mod command;
mod config;
pub mod convert;
mod error;
mod handlers;
mod keyspace;
pub mod request;
mod shared;
mod store;


// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::{Command, Operation};
pub use config::{MismatchPolicy, StoreConfig, CONFIG_FILE_NAME};
pub use error::Error;
pub use shared::SharedStore;
pub use store::Store;

// Re-export the value model so users don't need memkv-core directly
pub use memkv_core::{Value, ValueType, NIL};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
