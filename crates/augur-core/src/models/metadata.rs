use serde::{Deserialize, Serialize};

use super::ChatMessage;

/// Context attached to a [`Query`](super::Query): the originating chat message,
/// an opaque conversation/memory identifier, and the prior chat history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub chat_message: ChatMessage,
    /// Opaque to the pipeline; only compared for equality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_memory_id: Option<serde_json::Value>,
    #[serde(default)]
    pub chat_memory: Vec<ChatMessage>,
}

impl Metadata {
    pub fn new(
        chat_message: ChatMessage,
        chat_memory_id: Option<serde_json::Value>,
        chat_memory: Vec<ChatMessage>,
    ) -> Self {
        Self {
            chat_message,
            chat_memory_id,
            chat_memory,
        }
    }

    /// Metadata for a message with no memory id and no history.
    pub fn from_message(chat_message: ChatMessage) -> Self {
        Self::new(chat_message, None, Vec::new())
    }
}
