// SPDX-License-Identifier: MIT

//! Typed error handling for formstate-rs
//!
//! The reducer itself is total and never returns an error; this type
//! covers the fallible edges around it (path parsing, fixture loading).

use thiserror::Error;

/// Top-level error type for formstate-rs
#[derive(Debug, Error)]
pub enum FormError {
    /// A value path string could not be parsed
    #[error("Invalid value path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A model/action file had an extension we do not load
    #[error("Unsupported fixture format: {0}")]
    UnsupportedFormat(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl FormError {
    /// Create an invalid-path error
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported-format error
    pub fn unsupported_format(what: impl Into<String>) -> Self {
        Self::UnsupportedFormat(what.into())
    }
}
