// SPDX-License-Identifier: MIT

//! Point operations on a value tree
//!
//! `set` creates missing intermediate containers on the way down: objects
//! for key segments, null-padded arrays for index segments. An intermediate
//! of the wrong shape is replaced. `unset` removes an object key but leaves
//! a null hole at an array index so sibling positions keep their meaning.

use serde_json::{Map, Value};

use super::path::{Segment, ValuePath};

/// Read the node addressed by `path`, if present
pub fn get<'a>(root: &'a Value, path: &ValuePath) -> Option<&'a Value> {
    let mut node = root;
    for segment in path.segments() {
        node = match segment {
            Segment::Key(key) => node.get(key.as_str())?,
            Segment::Index(index) => node.get(*index)?,
        };
    }
    Some(node)
}

/// Write `value` at `path`, creating intermediate containers as needed
pub fn set(root: &mut Value, path: &ValuePath, value: Value) {
    set_in(root, path.segments(), value);
}

fn set_in(node: &mut Value, segments: &[Segment], value: Value) {
    match segments.split_first() {
        None => *node = value,
        Some((Segment::Key(key), rest)) => {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            if let Value::Object(map) = node {
                set_in(map.entry(key.clone()).or_insert(Value::Null), rest, value);
            }
        }
        Some((Segment::Index(index), rest)) => {
            if !node.is_array() {
                *node = Value::Array(Vec::new());
            }
            if let Value::Array(items) = node {
                if items.len() <= *index {
                    items.resize(index + 1, Value::Null);
                }
                set_in(&mut items[*index], rest, value);
            }
        }
    }
}

/// Remove the node addressed by `path`
///
/// Object entries are deleted outright. Array elements are overwritten
/// with null rather than spliced out. A missing path is a no-op, and so
/// is the root path.
pub fn unset(root: &mut Value, path: &ValuePath) {
    let Some((parent, leaf)) = path.split_last() else {
        return;
    };
    let Some(node) = node_at_mut(root, parent) else {
        return;
    };
    match (node, leaf) {
        (Value::Object(map), Segment::Key(key)) => {
            map.remove(key.as_str());
        }
        (Value::Array(items), Segment::Index(index)) => {
            if *index < items.len() {
                items[*index] = Value::Null;
            }
        }
        _ => {}
    }
}

fn node_at_mut<'a>(root: &'a mut Value, segments: &[Segment]) -> Option<&'a mut Value> {
    let mut node = root;
    for segment in segments {
        node = match segment {
            Segment::Key(key) => node.get_mut(key.as_str())?,
            Segment::Index(index) => node.get_mut(*index)?,
        };
    }
    Some(node)
}

/// Whether an input counts as empty for removal purposes
///
/// Null, the empty string, and empty containers are empty. Numbers and
/// booleans never are, so `0` and `false` survive as entered.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
