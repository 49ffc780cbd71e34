// SPDX-License-Identifier: MIT

//! The form state reducer
//!
//! `reduce` is a pure function from a state and an action to the next
//! state. Every action kind has a handler; an unrecognized action is
//! reported to the diagnostic sink and the state comes back unchanged.

use serde_json::{json, Value};

use crate::diag::{DiagnosticSink, LogSink};
use crate::model::Model;
use crate::value::{is_empty_value, prune, set, unset, Segment, ValuePath};

use super::action::{Action, ActionKind};
use super::state::FormState;

/// Apply an action to the form state, logging diagnostics
pub fn reduce(state: FormState, action: Action) -> FormState {
    reduce_with(state, action, &LogSink)
}

/// Apply an action to the form state with an explicit diagnostic sink
pub fn reduce_with(state: FormState, action: Action, diag: &dyn DiagnosticSink) -> FormState {
    log::debug!("Reducing action {}", action.kind_name());
    match action {
        Action::Init => init(state),
        Action::ChangeValue { path, value } => change_value(state, path, value),
        Action::ChangeModel { model } => change_model(state, model),
        Action::ValidationResolved {
            errors,
            validation_result,
        } => validation_resolved(state, errors, validation_result),
        Action::Unknown { kind } => {
            diag.error(&format!("Do not recognize action {}", kind));
            state
        }
    }
}

/// Fill canonical defaults into fields nothing has touched yet
fn init(mut state: FormState) -> FormState {
    if state.errors.is_null() {
        state.errors = json!({});
    }
    if state.validation_result.is_null() {
        state.validation_result = json!({"warnings": [], "errors": []});
    }
    state
}

/// Write or remove a value, then sweep the whole tree
fn change_value(mut state: FormState, path: ValuePath, value: Value) -> FormState {
    if path.is_root() {
        let swept = prune(value, state.active_model());
        state.value = swept;
        return state;
    }

    if is_empty_value(&value) && !required_at(state.active_model(), &path) {
        unset(&mut state.value, &path);
    } else {
        set(&mut state.value, &path, value);
    }

    let current = std::mem::take(&mut state.value);
    let swept = prune(current, state.active_model());
    state.value = swept;
    state
}

fn change_model(mut state: FormState, model: Model) -> FormState {
    state.base_model = Some(model.clone());
    state.model = Some(model);
    state
}

fn validation_resolved(
    mut state: FormState,
    errors: Value,
    validation_result: Value,
) -> FormState {
    state.errors = errors;
    state.validation_result = validation_result;
    state.last_action = Some(ActionKind::ValidationResolved);
    state
}

/// Whether the model marks the addressed entry required at its parent
///
/// Walks the model along the parent segments. A path the model does not
/// describe, or one ending in an array index, is never required.
fn required_at(schema: Option<&Model>, path: &ValuePath) -> bool {
    let Some((parent, leaf)) = path.split_last() else {
        return false;
    };
    let Some(mut model) = schema else {
        return false;
    };
    for segment in parent {
        match model.descend(segment) {
            Some(next) => model = next,
            None => return false,
        }
    }
    match leaf {
        Segment::Key(key) => model.requires(key),
        Segment::Index(_) => false,
    }
}
