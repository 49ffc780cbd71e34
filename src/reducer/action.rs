// SPDX-License-Identifier: MIT

//! Actions dispatched at the form state

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::model::Model;
use crate::value::ValuePath;

/// An action dispatched at the form state
///
/// Unrecognized wire types are carried as [`Action::Unknown`] so the
/// reducer can report them instead of the caller failing early.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fill canonical defaults into a fresh state
    Init,
    /// Write a value at a path, then sweep the whole tree
    ChangeValue { path: ValuePath, value: Value },
    /// Swap in a new model
    ChangeModel { model: Model },
    /// Adopt the outcome of a finished validation run
    ValidationResolved {
        errors: Value,
        validation_result: Value,
    },
    /// Anything the reducer does not recognize
    Unknown { kind: String },
}

impl Action {
    pub fn change_value(path: ValuePath, value: Value) -> Self {
        Self::ChangeValue { path, value }
    }

    pub fn change_model(model: Model) -> Self {
        Self::ChangeModel { model }
    }

    pub fn validation_resolved(errors: Value, validation_result: Value) -> Self {
        Self::ValidationResolved {
            errors,
            validation_result,
        }
    }

    pub fn unknown(kind: impl Into<String>) -> Self {
        Self::Unknown { kind: kind.into() }
    }

    /// The recognized kind, if any
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Action::Init => Some(ActionKind::Init),
            Action::ChangeValue { .. } => Some(ActionKind::ChangeValue),
            Action::ChangeModel { .. } => Some(ActionKind::ChangeModel),
            Action::ValidationResolved { .. } => Some(ActionKind::ValidationResolved),
            Action::Unknown { .. } => None,
        }
    }

    /// The kind tag as it appears on the wire
    pub fn kind_name(&self) -> &str {
        match self {
            Action::Unknown { kind } => kind,
            Action::Init => ActionKind::Init.as_str(),
            Action::ChangeValue { .. } => ActionKind::ChangeValue.as_str(),
            Action::ChangeModel { .. } => ActionKind::ChangeModel.as_str(),
            Action::ValidationResolved { .. } => ActionKind::ValidationResolved.as_str(),
        }
    }
}

/// Kinds of recognized actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Init,
    ChangeValue,
    ChangeModel,
    ValidationResolved,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Init => "INIT",
            ActionKind::ChangeValue => "CHANGE_VALUE",
            ActionKind::ChangeModel => "CHANGE_MODEL",
            ActionKind::ValidationResolved => "VALIDATION_RESOLVED",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
