//! Compose document model.
//!
//! Services, networks, and volumes are heterogeneous key/value blocks in a
//! compose file, so each block is a [`Attrs`] map of YAML values rather than
//! a rigid struct. `BTreeMap` keeps the rendered output deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Compose format version stamped into every generated document.
pub const COMPOSE_VERSION: &str = "3.6";

/// One service/network/volume block: attribute name → YAML value.
pub type Attrs = BTreeMap<String, Value>;

/// Top-level compose document. Field declaration order is the serialized
/// order: version, services, networks, volumes. Empty networks/volumes
/// maps are omitted from the output entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeFile {
    pub version: String,
    pub services: BTreeMap<String, Attrs>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub networks: BTreeMap<String, Attrs>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub volumes: BTreeMap<String, Attrs>,
}

impl ComposeFile {
    pub fn new(
        services: BTreeMap<String, Attrs>,
        networks: BTreeMap<String, Attrs>,
        volumes: BTreeMap<String, Attrs>,
    ) -> Self {
        Self {
            version: COMPOSE_VERSION.to_string(),
            services,
            networks,
            volumes,
        }
    }
}

/// `Some(s)` → YAML string, `None` → YAML null.
pub(crate) fn opt_string(value: Option<String>) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}

/// A `Vec<String>` as a YAML sequence. An absent vec becomes the empty
/// sequence, which the sentinel filter then drops.
pub(crate) fn string_seq(items: Vec<String>) -> Value {
    Value::Sequence(items.into_iter().map(Value::String).collect())
}

/// A string→string map as a YAML mapping with sorted keys.
pub(crate) fn string_map(entries: Option<&std::collections::HashMap<String, String>>) -> Value {
    let mut mapping = serde_yaml::Mapping::new();
    if let Some(entries) = entries {
        let sorted: BTreeMap<_, _> = entries.iter().collect();
        for (key, value) in sorted {
            mapping.insert(Value::String(key.clone()), Value::String(value.clone()));
        }
    }
    Value::Mapping(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_opt_string() {
        assert_eq!(opt_string(Some("x".into())), Value::String("x".into()));
        assert_eq!(opt_string(None), Value::Null);
    }

    #[test]
    fn test_string_map_sorted() {
        let mut labels = HashMap::new();
        labels.insert("b".to_string(), "2".to_string());
        labels.insert("a".to_string(), "1".to_string());

        let Value::Mapping(mapping) = string_map(Some(&labels)) else {
            panic!("expected mapping");
        };
        let keys: Vec<_> = mapping.keys().cloned().collect();
        assert_eq!(keys, vec![Value::String("a".into()), Value::String("b".into())]);
    }
}
