// SPDX-License-Identifier: MIT

//! Dot-separated paths into a value tree
//!
//! A path like `addresses.0.street` addresses one node inside the form
//! value. A segment that is a canonical decimal within the index bound
//! indexes an array; any other segment, leading zeros and oversized
//! numerics included, keys an object. The empty path addresses the root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormError;

/// Largest array position a parsed segment may address
const MAX_INDEX: usize = u16::MAX as usize;

/// One step of a [`ValuePath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object property name
    Key(String),
    /// Array position
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Path addressing a node within the value tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValuePath {
    segments: Vec<Segment>,
}

impl ValuePath {
    /// The root path (the entire value tree)
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dot-separated path; the empty string yields the root
    ///
    /// A segment becomes a [`Segment::Index`] only when it is a
    /// canonical decimal no larger than the index bound. Anything else,
    /// `01` and 20-digit numerics included, becomes a [`Segment::Key`].
    pub fn parse(input: &str) -> Result<Self, FormError> {
        if input.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for part in input.split('.') {
            if part.is_empty() {
                return Err(FormError::invalid_path(input, "empty segment"));
            }
            segments.push(match parse_index(part) {
                Some(index) => Segment::Index(index),
                None => Segment::Key(part.to_string()),
            });
        }
        Ok(Self { segments })
    }

    /// Whether this path addresses the root
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Split into parent segments and the final segment; `None` for the root
    pub fn split_last(&self) -> Option<(&[Segment], &Segment)> {
        self.segments.split_last().map(|(last, init)| (init, last))
    }
}

/// Canonical decimal within `MAX_INDEX`, or `None`
///
/// `usize::from_str` alone is too permissive here: it accepts leading
/// zeros and a `+` sign, and admits positions far beyond anything an
/// array write could pad out to.
fn parse_index(part: &str) -> Option<usize> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    let index = part.parse::<usize>().ok()?;
    if index <= MAX_INDEX {
        Some(index)
    } else {
        None
    }
}

impl From<Vec<Segment>> for ValuePath {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromStr for ValuePath {
    type Err = FormError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl Serialize for ValuePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ValuePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ValuePath::parse(&raw).map_err(serde::de::Error::custom)
    }
}
