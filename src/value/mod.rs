// SPDX-License-Identifier: MIT

//! The form value tree and operations over it
//!
//! This module provides:
//! - `ValuePath` - dot-separated addressing into the value tree
//! - `get` / `set` / `unset` - point operations with container auto-creation
//! - `prune` - schema-aware sweep of null and empty branches

mod ops;
mod path;
mod prune;

pub use ops::{get, is_empty_value, set, unset};
pub use path::{Segment, ValuePath};
pub use prune::prune;
