//! Command handlers organized by value type.
//!
//! | Module | Commands | Value type |
//! |--------|----------|------------|
//! | `string` | PUT, GET, SET, EXISTS, INCR | any / String |
//! | `set` | SADD | Set |
//! | `hash` | HSET, HMSET, HMGET, HGETALL | Hash |
//! | `zset` | ZADD, ZINCRBY, ZSCORE, ZREVRANGE | Hash (member -> score text) |
//!
//! Every handler takes the key space and the unpacked command slots and
//! returns the reply value. Numeric parsing never fails a command; the
//! helpers below substitute a fixed default and log at debug level.

pub mod hash;
pub mod set;
pub mod string;
pub mod zset;

use tracing::debug;

/// Parse base-10 integer text, surrounding whitespace allowed.
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parse a score. NaN is not a usable score and counts as a parse failure.
pub(crate) fn parse_score(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|f| !f.is_nan())
}

/// [`parse_score`] with a fallback of `0.0`.
pub(crate) fn score_or_zero(text: &str, what: &'static str) -> f64 {
    parse_score(text).unwrap_or_else(|| {
        debug!(target: "memkv::executor", what, text, "unparseable score, using 0");
        0.0
    })
}

/// Shortest text that parses back to the same `f64` ("4", "2.5", "inf").
pub(crate) fn format_score(score: f64) -> String {
    score.to_string()
}
