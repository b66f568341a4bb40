//! Error Handling Tests
//!
//! Commands never fail under the default policy; errors only surface from
//! `try_execute` under the reject policy and from the request boundary.

use crate::common::*;
use memkv::{Command, Error, Operation, ValueType, NIL};

#[test]
fn default_policy_never_errors() {
    let mut store = create_store();
    store.execute(Command::set("k", "text"));
    for op in Operation::ALL {
        let cmd = Command::new(op, "k").with_value("x").with_old_value("y");
        assert!(store.try_execute(cmd).is_ok(), "{} failed", op);
    }
}

#[test]
fn bad_numbers_fall_back() {
    let mut store = create_store();
    store.execute(Command::zadd("z", "m", "not-a-score"));
    assert_eq!(store.execute(Command::zincrby("z", "also-not", "m")), text("0"));
    let cmd = Command::new(Operation::Zrevrange, "z")
        .with_value("first")
        .with_old_value("last");
    assert_eq!(store.execute(cmd), list(&["m"]));
}

#[test]
fn rejecting_store_reports_wrong_type() {
    let mut store = create_rejecting_store();
    store.execute(Command::hset("h", "f", "v"));
    match store.try_execute(Command::incr("h")) {
        Err(Error::WrongType {
            key,
            expected,
            actual,
        }) => {
            assert_eq!(key, "h");
            assert_eq!(expected, ValueType::String.to_string());
            assert_eq!(actual, ValueType::Hash.to_string());
        }
        other => panic!("expected WrongType, got {:?}", other),
    }
}

#[test]
fn rejecting_store_execute_is_nil_and_untouched() {
    let mut store = create_rejecting_store();
    store.execute(Command::sadd("s", "m"));
    assert_eq!(store.execute(Command::zadd("s", "m", "1")), NIL);
    let kept = store.execute(Command::get("s"));
    assert_eq!(kept.value_type(), ValueType::Set);
    assert_eq!(kept.as_set().map(|s| s.len()), Some(1));
}

#[test]
fn error_serializes() {
    let err = Error::UnknownOperation {
        name: "LPUSH".into(),
    };
    let json = serde_json::to_string(&err).unwrap();
    let back: Error = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
