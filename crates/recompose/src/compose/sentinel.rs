//! Sentinel filtering — the fixed set of "empty/default" values that are
//! suppressed from a service block.

use serde_yaml::Value;

/// True if `value` is one of the nine designated empty/default values:
/// null, `""`, empty sequence, `"null"`, empty mapping, `"default"`,
/// integer `0`, `","`, `"no"`.
///
/// The check is by exact value, never "falsy": booleans and floats are
/// never sentinels, so `privileged: false` survives filtering.
pub fn is_sentinel(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => matches!(s.as_str(), "" | "null" | "default" | "," | "no"),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Number(n) => n.as_i64() == Some(0),
        _ => false,
    }
}
