//! Removal of dead wood from a value tree
//!
//! After every value change the whole tree is swept once. Null entries
//! and entries that collapsed to an empty container are dropped from
//! objects, except where the schema marks them required. Array elements
//! are pruned in place but never removed, so positions stay stable.
//!
//! A subtree the schema says nothing about is treated as opaque: it is
//! kept even when empty, though nulls inside it are still swept.

use serde_json::{Map, Value};

use crate::model::Model;

/// Prune `value` against an optional schema, returning the swept tree
///
/// The root itself is never dropped; an all-empty tree prunes to an
/// empty container, not to null.
pub fn prune(value: Value, schema: Option<&Model>) -> Value {
    match value {
        Value::Object(map) => {
            let mut kept = Map::new();
            for (key, child) in map {
                let child_schema = schema.and_then(|m| m.property(&key));
                let required = schema.map_or(false, |m| m.requires(&key));
                let pruned = prune(child, child_schema);
                if keep_entry(&pruned, child_schema.is_some(), required) {
                    kept.insert(key, pruned);
                }
            }
            Value::Object(kept)
        }
        Value::Array(items) => {
            let item_schema = schema.and_then(|m| m.item());
            Value::Array(
                items
                    .into_iter()
                    .map(|item| prune(item, item_schema))
                    .collect(),
            )
        }
        scalar => scalar,
    }
}

fn keep_entry(pruned: &Value, has_schema: bool, required: bool) -> bool {
    match pruned {
        Value::Null => required,
        Value::Object(map) if map.is_empty() => required || !has_schema,
        Value::Array(items) if items.is_empty() => required || !has_schema,
        _ => true,
    }
}
