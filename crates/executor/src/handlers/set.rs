//! Set command handlers.

use memkv_core::Value;

use crate::keyspace::Keyspace;
use crate::Result;

/// Handle SADD: insert one member, reply with the cardinality afterwards.
pub fn sadd(ks: &mut Keyspace, key: String, member: Value) -> Result<Value> {
    let set = ks.set_mut(&key)?;
    set.insert(member.text().to_string());
    Ok(Value::String(set.len().to_string()))
}
