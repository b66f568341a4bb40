//! Command Dispatch Tests
//!
//! End-to-end checks of the documented command table through the facade.

use crate::common::*;
use memkv::{Command, Operation, Value, NIL};
use std::collections::HashMap;

// ============================================================================
// String commands
// ============================================================================

#[test]
fn incr_absent_key_yields_one() {
    let mut store = create_store();
    assert_eq!(store.execute(Command::incr("total_users")), text("1"));
}

#[test]
fn incr_non_numeric_yields_zero() {
    let mut store = create_store();
    store.execute(Command::set("k", "not a number"));
    assert_eq!(store.execute(Command::incr("k")), text("0"));
}

#[test]
fn incr_empty_string_counts_as_zero() {
    let mut store = create_store();
    store.execute(Command::set("k", ""));
    assert_eq!(store.execute(Command::incr("k")), text("1"));
}

#[test]
fn get_absent_key_is_nil() {
    let mut store = create_store();
    let reply = store.execute(Command::get("nope"));
    assert!(reply.is_nil());
}

#[test]
fn get_after_set_empty_is_nil() {
    let mut store = create_store();
    store.execute(Command::set("k", ""));
    assert!(store.execute(Command::get("k")).is_nil());
}

#[test]
fn exists_replies_strings() {
    let mut store = create_store();
    assert_eq!(store.execute(Command::exists("k")), text("0"));
    store.execute(Command::set("k", "v"));
    assert_eq!(store.execute(Command::exists("k")), text("1"));
}

// ============================================================================
// Set and hash commands
// ============================================================================

#[test]
fn sadd_same_member_twice_keeps_cardinality() {
    let mut store = create_store();
    let once = store.execute(Command::sadd("user:1:rooms", "0"));
    let twice = store.execute(Command::sadd("user:1:rooms", "0"));
    assert_eq!(once, twice);
    assert_eq!(twice, text("1"));
}

#[test]
fn hset_new_field_once() {
    let mut store = create_store();
    let replies: Vec<Value> = (0..3)
        .map(|i| store.execute(Command::hset("h", "f", i.to_string())))
        .collect();
    assert_eq!(replies, vec![text("1"), text("0"), text("0")]);
}

#[test]
fn hmset_counts_fields_absent_before_call() {
    let mut store = create_store();
    store.execute(Command::hset("h", "existing", "x"));
    let fields: HashMap<String, String> = ["existing", "new1", "new2"]
        .iter()
        .map(|f| (f.to_string(), "v".to_string()))
        .collect();
    assert_eq!(store.execute(Command::hmset("h", fields)), text("2"));
}

#[test]
fn hmget_missing_key_is_empty_list() {
    let mut store = create_store();
    assert_eq!(store.execute(Command::hmget("h", "f")), list(&[]));
}

// ============================================================================
// Sorted-set commands
// ============================================================================

#[test]
fn zincrby_accumulates_and_round_trips() {
    let mut store = create_store();
    store.execute(Command::zincrby("z", "2.5", "m"));
    assert_eq!(store.execute(Command::zincrby("z", "1.5", "m")), text("4"));
    assert_eq!(store.execute(Command::zscore("z", "m")), text("4"));
}

#[test]
fn zrevrange_documented_examples() {
    let mut store = create_store();
    seed_board(&mut store, "z");
    assert_eq!(store.execute(Command::zrevrange("z", 0, 1)), list(&["a", "c"]));
    assert_eq!(store.execute(Command::zrevrange("z", -2, -1)), list(&["c", "b"]));
    assert_eq!(store.execute(Command::zrevrange("z", 5, 10)), list(&[]));
}

#[test]
fn zrevrange_start_after_stop_is_empty() {
    let mut store = create_store();
    seed_board(&mut store, "z");
    assert_eq!(store.execute(Command::zrevrange("z", 2, 1)), list(&[]));
}

#[test]
fn zrange_replies_nil() {
    let mut store = create_store();
    seed_board(&mut store, "z");
    assert_eq!(store.execute(Command::new(Operation::Zrange, "z")), NIL);
}

#[test]
fn every_operation_replies_without_panicking() {
    let mut store = create_store();
    for op in Operation::ALL {
        let _ = store.execute(Command::new(op, "k"));
    }
    assert!(store.contains_key("k"));
}
