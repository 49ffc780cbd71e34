// SPDX-License-Identifier: MIT

//! formstate-rs - form state management as a pure reducer
//!
//! A form's whole state (value, model, validation outcome) lives in a
//! single [`FormState`] record. Every change is an [`Action`], and
//! [`reduce`] maps a state and an action to the next state, nothing
//! else. Empty inputs remove their entry, and the value tree is swept
//! against the model after every change, so the value holds only what
//! was actually entered plus what the model insists on keeping.
//!
//! ```
//! use formstate_rs::{reduce, Action, FormState, ValuePath};
//! use serde_json::json;
//!
//! let state = reduce(FormState::default(), Action::Init);
//! let state = reduce(
//!     state,
//!     Action::change_value(ValuePath::parse("bar.qux")?, json!("wine")),
//! );
//! assert_eq!(state.value, json!({"bar": {"qux": "wine"}}));
//! # Ok::<(), formstate_rs::FormError>(())
//! ```

pub mod diag;
pub mod error;
pub mod model;
pub mod reducer;
pub mod store;
pub mod value;

pub use diag::{DiagnosticSink, LogSink};
pub use error::FormError;
pub use model::{Model, ModelLoader, ModelType};
pub use reducer::{reduce, reduce_with, Action, ActionKind, FormState};
pub use store::FormStore;
pub use value::{prune, ValuePath};
