//! memkv - in-process data structure store
//!
//! memkv keeps strings, lists, sets, hashes and hash-backed sorted sets in a
//! single key space and drives them with a small command set modelled on a
//! well-known key-value server.
//!
//! # Quick Start
//!
//! ```ignore
//! use memkv::{Command, SharedStore, Value};
//!
//! let store = SharedStore::new();
//!
//! store.execute(Command::hset("user:1", "username", "alice"));
//! let name = store.execute(Command::hmget("user:1", "username"));
//! assert_eq!(name, Value::List(vec!["alice".into()]));
//! ```
//!
//! # Architecture
//!
//! Every operation goes through [`Store::execute`], which dispatches a
//! [`Command`] on its [`Operation`] tag. [`SharedStore`] wraps one store in
//! a mutex for multi-threaded hosts; [`request`] and [`convert`] carry the
//! host-facing key and value conversions.

// Re-export the public API from memkv-executor
pub use memkv_executor::*;
