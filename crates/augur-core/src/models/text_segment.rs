use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A retrieved piece of text plus its document metadata (source, page, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl TextSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(
        text: impl Into<String>,
        metadata: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Builder-style single metadata entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
