// SPDX-License-Identifier: MIT

//! A store that owns form state and applies actions to it

use crate::diag::{DiagnosticSink, LogSink};
use crate::reducer::{reduce_with, Action, FormState};

/// Owns one form's state and runs actions through the reducer
pub struct FormStore {
    state: FormState,
    diag: Box<dyn DiagnosticSink>,
}

impl FormStore {
    /// Store over the canonical initial state, logging diagnostics
    pub fn new() -> Self {
        Self::with_sink(Box::new(LogSink))
    }

    /// Store over the canonical initial state with an explicit sink
    pub fn with_sink(diag: Box<dyn DiagnosticSink>) -> Self {
        Self {
            state: FormState::default(),
            diag,
        }
    }

    /// Current state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply one action and return the new state
    pub fn dispatch(&mut self, action: Action) -> &FormState {
        let state = std::mem::take(&mut self.state);
        self.state = reduce_with(state, action, self.diag.as_ref());
        &self.state
    }

    /// Apply actions in order and return the final state
    pub fn dispatch_all<I>(&mut self, actions: I) -> &FormState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Give up the store and keep the state
    pub fn into_state(self) -> FormState {
        self.state
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
