// SPDX-License-Identifier: MIT

//! Form models and fixture loading
//!
//! This module provides:
//! - `Model` - schema describing the expected shape of the form value
//! - `ModelLoader` - YAML/JSON loading for models, values, and actions

mod loader;
mod schema;

pub use loader::{ModelLoader, RawAction};
pub use schema::{Model, ModelType};
