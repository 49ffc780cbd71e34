// SPDX-License-Identifier: MIT

//! The form state record

use serde::Serialize;
use serde_json::Value;

use crate::model::Model;

use super::action::ActionKind;

/// Complete state of one form
///
/// The canonical initial state is [`FormState::default`]: a null value
/// and no models, with nothing validated yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Current form value tree
    pub value: Value,
    /// Model the form was opened with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_model: Option<Model>,
    /// Model currently in effect, when one has been swapped in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    /// Validation errors as delivered by the validator
    pub errors: Value,
    /// Full outcome of the last validation run
    pub validation_result: Value,
    /// Stamped only when a validation run resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_action: Option<ActionKind>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            value: Value::Null,
            base_model: None,
            model: None,
            errors: serde_json::json!({}),
            validation_result: serde_json::json!({"warnings": [], "errors": []}),
            last_action: None,
        }
    }
}

impl FormState {
    /// The model that change and prune decisions consult: the current
    /// model if one is set, otherwise the base model
    pub fn active_model(&self) -> Option<&Model> {
        self.model.as_ref().or(self.base_model.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_is_canonical_initial() {
        let state = FormState::default();
        assert_eq!(state.value, Value::Null);
        assert_eq!(state.base_model, None);
        assert_eq!(state.model, None);
        assert_eq!(state.errors, json!({}));
        assert_eq!(state.validation_result, json!({"warnings": [], "errors": []}));
        assert_eq!(state.last_action, None);
    }

    #[test]
    fn test_active_model_prefers_current_over_base() {
        let base: Model = serde_json::from_value(json!({"type": "object"})).unwrap();
        let narrowed: Model = serde_json::from_value(json!({"type": "string"})).unwrap();

        let mut state = FormState {
            base_model: Some(base.clone()),
            ..FormState::default()
        };
        assert_eq!(state.active_model(), Some(&base));

        state.model = Some(narrowed.clone());
        assert_eq!(state.active_model(), Some(&narrowed));
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let state = FormState {
            value: json!({"foo": 12}),
            errors: json!({}),
            validation_result: json!({"warnings": [], "errors": []}),
            last_action: Some(ActionKind::ValidationResolved),
            ..FormState::default()
        };
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({
                "value": {"foo": 12},
                "errors": {},
                "validationResult": {"warnings": [], "errors": []},
                "lastAction": "VALIDATION_RESOLVED",
            })
        );
    }
}
