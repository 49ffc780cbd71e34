// SPDX-License-Identifier: MIT

//! Form state reduction
//!
//! This module provides:
//! - `FormState` - the complete state of one form
//! - `Action` / `ActionKind` - the things that can happen to it
//! - `reduce` / `reduce_with` - the pure transition function

mod action;
mod engine;
mod state;

pub use action::{Action, ActionKind};
pub use engine::{reduce, reduce_with};
pub use state::FormState;
