use serde::{Deserialize, Serialize};

use super::{ChatMessage, Metadata};

/// A text expansion or rewrite of the user's request, used to drive retrieval.
///
/// Immutable once created; compared by value over text and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(text: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            text: text.into(),
            metadata: Some(metadata),
        }
    }

    /// A new query with `text` that keeps this query's metadata.
    pub fn rewritten(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: self.metadata.clone(),
        }
    }

    /// Chat history carried in the metadata, empty when there is none.
    pub fn chat_memory(&self) -> &[ChatMessage] {
        self.metadata
            .as_ref()
            .map(|m| m.chat_memory.as_slice())
            .unwrap_or_default()
    }
}
