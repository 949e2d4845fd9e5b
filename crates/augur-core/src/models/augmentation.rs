use serde::{Deserialize, Serialize};

use super::{ChatMessage, Content, Metadata};

/// Input to `RetrievalAugmentor::augment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentationRequest {
    pub chat_message: ChatMessage,
    pub metadata: Metadata,
}

impl AugmentationRequest {
    pub fn new(chat_message: ChatMessage, metadata: Metadata) -> Self {
        Self {
            chat_message,
            metadata,
        }
    }

    /// A request whose metadata only references the message itself.
    pub fn from_message(chat_message: ChatMessage) -> Self {
        let metadata = Metadata::from_message(chat_message.clone());
        Self::new(chat_message, metadata)
    }
}

/// Output of `RetrievalAugmentor::augment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentationResult {
    /// The augmented message, or the original one when nothing was retrieved.
    pub chat_message: ChatMessage,
    /// The merged list actually handed to the injector.
    pub contents: Vec<Content>,
}

impl AugmentationResult {
    pub fn new(chat_message: ChatMessage, contents: Vec<Content>) -> Self {
        Self {
            chat_message,
            contents,
        }
    }

    /// The original message, nothing injected.
    pub fn unchanged(chat_message: ChatMessage) -> Self {
        Self::new(chat_message, Vec::new())
    }
}
