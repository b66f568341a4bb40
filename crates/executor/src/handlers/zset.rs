//! Sorted-set command handlers.
//!
//! A sorted set is a Hash of member -> score text. Nothing is kept in
//! order; ZREVRANGE sorts on every read.

use std::cmp::Ordering;
use std::num::IntErrorKind;

use memkv_core::{Value, NIL};
use tracing::debug;

use super::{format_score, score_or_zero};
use crate::keyspace::Keyspace;
use crate::Result;

/// Handle ZADD: store the score text verbatim, reply "1".
pub fn zadd(ks: &mut Keyspace, key: String, member: Value, score: Value) -> Result<Value> {
    let scores = ks.hash_mut(&key)?;
    scores.insert(member.text().to_string(), score.text().to_string());
    Ok(Value::from("1"))
}

/// Handle ZINCRBY: add `increment` to the member's score (0 if absent).
///
/// An unparseable increment or stored score counts as 0. A NaN sum
/// (`inf + -inf`) stores "0".
pub fn zincrby(ks: &mut Keyspace, key: String, increment: Value, member: Value) -> Result<Value> {
    let delta = score_or_zero(increment.text(), "increment");
    let scores = ks.hash_mut(&key)?;
    let slot = scores.entry(member.text().to_string()).or_default();
    let current = if slot.is_empty() {
        0.0
    } else {
        score_or_zero(slot, "stored score")
    };
    let mut next = current + delta;
    if next.is_nan() {
        debug!(target: "memkv::executor", key = %key, "score sum is NaN, storing 0");
        next = 0.0;
    }
    *slot = format_score(next);
    Ok(Value::String(slot.clone()))
}

/// Handle ZSCORE: the stored score text, or nil.
pub fn zscore(ks: &Keyspace, key: String, member: Value) -> Result<Value> {
    let score = ks
        .hash(&key)
        .and_then(|scores| scores.get(member.text()))
        .map(|s| Value::String(s.clone()));
    Ok(score.unwrap_or(NIL))
}

/// Handle ZREVRANGE: members by descending score, inclusive index range.
///
/// Negative indexes count from the end. An unparseable `start` is 0 and an
/// unparseable `stop` is -1. Equal scores are ordered by member name.
pub fn zrevrange(ks: &Keyspace, key: String, start: Value, stop: Value) -> Result<Value> {
    let mut members: Vec<(&str, f64)> = ks
        .hash(&key)
        .map(|scores| {
            scores
                .iter()
                .map(|(member, score)| (member.as_str(), score_or_zero(score, "stored score")))
                .collect()
        })
        .unwrap_or_default();

    members.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let start = bound(start.text(), 0);
    let stop = bound(stop.text(), -1);
    let range = match clamp_range(start, stop, members.len()) {
        Some(range) => range,
        None => return Ok(Value::List(Vec::new())),
    };

    Ok(Value::List(
        members[range]
            .iter()
            .map(|(member, _)| member.to_string())
            .collect(),
    ))
}

/// Integers outside `i64` saturate; only non-numeric text takes `default`.
fn bound(text: &str, default: i64) -> i64 {
    match text.trim().parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                debug!(target: "memkv::executor", text, default, "unparseable range bound");
                default
            }
        },
    }
}

/// Translate negative indexes against `len`, clamp, and return the
/// inclusive range, or `None` when it is empty.
fn clamp_range(start: i64, stop: i64, len: usize) -> Option<std::ops::RangeInclusive<usize>> {
    let n = len as i64;
    let start = if start < 0 { n.saturating_add(start) } else { start };
    let stop = if stop < 0 { n.saturating_add(stop) } else { stop };
    let start = start.max(0);
    let stop = stop.min(n - 1);
    if start > stop {
        return None;
    }
    Some(start as usize..=stop as usize)
}
