// SPDX-License-Identifier: MIT

//! Form model definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema describing the expected shape of a form value subtree
///
/// Every field is optional; an empty model says nothing about its
/// subtree and leaves it opaque to pruning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Model {
    /// Declared type of this node
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    /// Sub-models for object properties
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, Model>,
    /// Property names that must stay present even when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Sub-model for array elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<Model>>,
}

/// Node types a model can declare
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl Model {
    /// Sub-model for an object property
    pub fn property(&self, key: &str) -> Option<&Model> {
        self.properties.get(key)
    }

    /// Whether a property must survive pruning even when empty
    pub fn requires(&self, key: &str) -> bool {
        self.required.iter().any(|k| k == key)
    }

    /// Sub-model for array elements
    pub fn item(&self) -> Option<&Model> {
        self.item.as_deref()
    }

    /// Follow one path segment into the model, if it is described
    pub fn descend(&self, segment: &crate::value::Segment) -> Option<&Model> {
        match segment {
            crate::value::Segment::Key(key) => self.property(key),
            crate::value::Segment::Index(_) => self.item(),
        }
    }
}
