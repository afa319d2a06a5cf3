//! Topic entity.

use serde::{Deserialize, Serialize};

/// A named subject in the tutorial catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique topic identifier.
    pub id: u32,
    /// Display name (e.g. "C++").
    pub name: String,
    /// Short description shown in topic listings.
    pub description: String,
}

impl Topic {
    /// Create a new topic record.
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
