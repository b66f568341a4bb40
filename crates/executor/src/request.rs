//! Request boundary for hosts.
//!
//! Hosts address keys by 64-bit id and name operations by string. This
//! module turns those into a [`Command`] and reports the outcome as a
//! `Result` in place of a success flag:
//!
//! - [`key_id`]: name -> 64-bit id (digits parse, anything else hashes)
//! - [`send_request`]: typed operation + id
//! - [`app_request`]: operation name + key name, optional slots

use memkv_core::{Value, NIL};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::{Command, Operation, Result, SharedStore};

/// Map a key name to the 64-bit id the store is addressed by.
///
/// A name made only of ASCII digits that fits in an `i64` is that number.
/// Any other name takes the SHA-256 digest of its bytes, reduced mod 2^64
/// and shifted down by 2^63 into the signed range.
pub fn key_id(name: &str) -> i64 {
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(id) = name.parse::<i64>() {
            return id;
        }
    }
    let digest = Sha256::digest(name.as_bytes());
    let mut low = [0u8; 8];
    low.copy_from_slice(&digest[24..]);
    // x - 2^63 over [0, 2^64) is the same bit pattern as flipping the top bit
    (u64::from_be_bytes(low) ^ (1 << 63)) as i64
}

/// Execute `op` against the key with id `key`.
///
/// The id is stringified before it reaches the store, so the store's key
/// space is always text.
pub fn send_request(
    store: &SharedStore,
    op: Operation,
    key: i64,
    value: Value,
    old_value: Value,
) -> Result<Value> {
    let cmd = Command::new(op, key.to_string())
        .with_value(value)
        .with_old_value(old_value);
    store.try_execute(cmd).map_err(|e| {
        warn!(target: "memkv::request", op = op.name(), key, error = %e, "request failed");
        e
    })
}

/// Execute an operation given by name against a named key.
///
/// Missing slots are [`NIL`].
///
/// # Errors
///
/// Returns [`Error::UnknownOperation`](crate::Error::UnknownOperation) if
/// `op_name` is not a command name, plus anything the store reports.
pub fn app_request(
    store: &SharedStore,
    op_name: &str,
    key_name: &str,
    value: Option<Value>,
    old_value: Option<Value>,
) -> Result<Value> {
    let op: Operation = op_name.parse().map_err(|e| {
        warn!(target: "memkv::request", op = op_name, key = key_name, error = %e, "unrecognised operation");
        e
    })?;
    send_request(
        store,
        op,
        key_id(key_name),
        value.unwrap_or(NIL),
        old_value.unwrap_or(NIL),
    )
}
