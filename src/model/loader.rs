//! Model and action fixture loading
//!
//! Models, actions, and values arrive as YAML or JSON files. Actions are
//! read through a raw wire struct first, then turned into [`Action`]
//! values; a type string nobody recognizes still parses, as
//! [`Action::Unknown`], so the reducer gets to report it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::FormError;
use crate::reducer::Action;
use crate::value::ValuePath;

use super::schema::Model;

/// Loads models, values, and action fixtures from YAML or JSON files
pub struct ModelLoader;

enum FileFormat {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Result<FileFormat, FormError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
        Some("json") => Ok(FileFormat::Json),
        other => Err(FormError::unsupported_format(other.unwrap_or("none"))),
    }
}

impl ModelLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a model from a YAML or JSON file, chosen by extension
    pub fn load_model<P: AsRef<Path>>(&self, path: P) -> Result<Model, FormError> {
        let format = format_for(path.as_ref())?;
        let content = fs::read_to_string(path)?;
        match format {
            FileFormat::Yaml => Self::parse_model_yaml(&content),
            FileFormat::Json => Self::parse_model_json(&content),
        }
    }

    /// Parse a model from a YAML string
    pub fn parse_model_yaml(content: &str) -> Result<Model, FormError> {
        let model: Model = serde_yaml::from_str(content)?;
        Ok(model)
    }

    /// Parse a model from a JSON string
    pub fn parse_model_json(content: &str) -> Result<Model, FormError> {
        let model: Model = serde_json::from_str(content)?;
        Ok(model)
    }

    /// Load a form value from a YAML or JSON file
    pub fn load_value<P: AsRef<Path>>(&self, path: P) -> Result<Value, FormError> {
        let format = format_for(path.as_ref())?;
        let content = fs::read_to_string(path)?;
        match format {
            FileFormat::Yaml => Ok(serde_yaml::from_str(&content)?),
            FileFormat::Json => Ok(serde_json::from_str(&content)?),
        }
    }

    /// Load a list of actions from a YAML or JSON file
    pub fn load_actions<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Action>, FormError> {
        let format = format_for(path.as_ref())?;
        let content = fs::read_to_string(path)?;
        match format {
            FileFormat::Yaml => Self::parse_actions_yaml(&content),
            FileFormat::Json => Self::parse_actions_json(&content),
        }
    }

    /// Parse a list of actions from a YAML string
    pub fn parse_actions_yaml(content: &str) -> Result<Vec<Action>, FormError> {
        let raw: Vec<RawAction> = serde_yaml::from_str(content)?;
        raw.into_iter().map(Action::try_from).collect()
    }

    /// Parse a list of actions from a JSON string
    pub fn parse_actions_json(content: &str) -> Result<Vec<Action>, FormError> {
        let raw: Vec<RawAction> = serde_json::from_str(content)?;
        raw.into_iter().map(Action::try_from).collect()
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire form of an action, as found in fixture files
#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    /// Action type tag
    #[serde(rename = "type")]
    pub action_type: String,
    /// Dotted path for value changes
    #[serde(default)]
    pub path: Option<String>,
    /// New value for value changes
    #[serde(default)]
    pub value: Option<Value>,
    /// Model payload for model changes
    #[serde(default)]
    pub model: Option<Model>,
    /// Error payload for resolved validations
    #[serde(default)]
    pub errors: Option<Value>,
    /// Validation outcome payload for resolved validations
    #[serde(default, rename = "validationResult")]
    pub validation_result: Option<Value>,
}

impl TryFrom<RawAction> for Action {
    type Error = FormError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        Ok(match raw.action_type.as_str() {
            "INIT" => Action::Init,
            "CHANGE_VALUE" => Action::ChangeValue {
                path: ValuePath::parse(&raw.path.unwrap_or_default())?,
                value: raw.value.unwrap_or(Value::Null),
            },
            "CHANGE_MODEL" => Action::ChangeModel {
                model: raw.model.unwrap_or_default(),
            },
            "VALIDATION_RESOLVED" => Action::ValidationResolved {
                errors: raw.errors.unwrap_or(Value::Null),
                validation_result: raw.validation_result.unwrap_or(Value::Null),
            },
            other => Action::Unknown {
                kind: other.to_string(),
            },
        })
    }
}
