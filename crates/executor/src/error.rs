//! Error types for command execution.
//!
//! Commands themselves are designed not to fail: numeric parse failures fall
//! back to documented defaults and type mismatches re-initialise the key.
//! The variants below cover what is left:
//!
//! | Category | Variants | Description |
//! |----------|----------|-------------|
//! | Request | `UnknownOperation`, `InvalidInput` | Bad input at the request boundary |
//! | Type | `WrongType` | Mismatch under the `reject` policy |
//! | Config | `InvalidConfig`, `Io` | Configuration loading |
//! | System | `Internal` | Invariant violation |

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Example
///
/// ```ignore
/// use memkv_executor::{Command, Error, Store};
///
/// match store.try_execute(Command::hset("user:1", "name", "alice")) {
///     Ok(reply) => { /* handle reply */ }
///     Err(Error::WrongType { key, .. }) => {
///         println!("'{}' holds another type", key);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Operation name is not part of the command set
    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    /// Key holds a different type and the store rejects migration
    #[error("wrong type for key '{key}': expected {expected}, got {actual}")]
    WrongType {
        key: String,
        expected: String,
        actual: String,
    },

    /// Host value could not be converted
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Configuration could not be parsed or validated
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}
