//! Core types for memkv
//!
//! This crate defines the value model shared by every layer:
//! - Value: Tagged union over String, List, Set and Hash
//! - ValueType: Variant tag of a Value
//! - NIL: The "no result" sentinel (an empty String)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod value;

pub use value::{Value, ValueType, NIL};
