//! Messages pinned to a location

use crate::Point;
use std::collections::BTreeMap;

/// A message left at a location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Note {
    /// Location the note refers to
    pub location: Point,
    /// Message body
    pub message: String,
    /// Sender metadata, carried through unchanged
    pub attributes: BTreeMap<String, String>,
}

impl Note {
    /// Create a note without attributes
    pub fn new(location: Point, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an opaque attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
