//! Request boundary tests
//!
//! Drives the store the way a host binding does: operation names, key
//! names mapped to 64-bit ids, JSON values in and out.

use crate::common::*;
use memkv::convert::{from_json, to_json};
use memkv::request::{app_request, key_id, send_request};
use memkv::{Error, Operation, Value, NIL};
use serde_json::json;

#[test]
fn create_user_flow() {
    let store = create_shared();

    let next_id = app_request(&store, "INCR", "total_users", None, None).unwrap();
    assert_eq!(next_id, text("1"));
    let user_key = format!("user:{}", next_id.text());

    let ok = app_request(
        &store,
        "SET",
        "username:alice",
        Some(Value::from(user_key.as_str())),
        None,
    )
    .unwrap();
    assert_eq!(ok, text("OK"));

    let fields = from_json(&json!({"username": "alice", "password": "x"})).unwrap();
    let added = app_request(&store, "HMSET", &user_key, Some(fields), None).unwrap();
    assert_eq!(added, text("2"));

    let name = app_request(&store, "hmget", &user_key, Some(text("username")), None).unwrap();
    assert_eq!(to_json(&name), json!(["alice"]));
}

#[test]
fn messages_flow() {
    let store = create_shared();
    for (msg, ts) in [("first", "100"), ("second", "101"), ("third", "102")] {
        app_request(&store, "ZADD", "room:1:2", Some(text(msg)), Some(text(ts))).unwrap();
    }
    assert_eq!(
        app_request(&store, "EXISTS", "room:1:2", None, None).unwrap(),
        text("1")
    );
    let page = app_request(&store, "ZREVRANGE", "room:1:2", Some(text("0")), Some(text("1"))).unwrap();
    assert_eq!(to_json(&page), json!(["third", "second"]));
}

#[test]
fn key_names_and_ids_address_the_same_key() {
    let store = create_shared();
    app_request(&store, "SET", "session", Some(text("v")), None).unwrap();
    let reply = send_request(&store, Operation::Get, key_id("session"), NIL, NIL).unwrap();
    assert_eq!(reply, text("v"));
}

#[test]
fn digit_key_names_are_used_as_ids() {
    let store = create_shared();
    app_request(&store, "SET", "12", Some(text("twelve")), None).unwrap();
    let reply = send_request(&store, Operation::Get, 12, NIL, NIL).unwrap();
    assert_eq!(reply, text("twelve"));
}

#[test]
fn unknown_operation_name_fails() {
    let store = create_shared();
    assert!(matches!(
        app_request(&store, "FLUSHALL", "k", None, None),
        Err(Error::UnknownOperation { .. })
    ));
}

#[test]
fn non_string_json_members_fail_conversion() {
    assert!(matches!(
        from_json(&json!(["a", {"b": 1}])),
        Err(Error::InvalidInput { .. })
    ));
}

#[test]
fn json_scalars_convert_to_nil() {
    assert_eq!(from_json(&json!(3.5)).unwrap(), NIL);
}
