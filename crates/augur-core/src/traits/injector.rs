use crate::errors::AugurResult;
use crate::models::{ChatMessage, Content};

/// Produces the augmented message from the merged contents.
pub trait ContentInjector: Send + Sync {
    /// Must not mutate its inputs. An empty `contents` yields the message unchanged.
    fn inject(&self, contents: &[Content], chat_message: &ChatMessage) -> AugurResult<ChatMessage>;
}
