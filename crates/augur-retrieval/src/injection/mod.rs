//! Content injectors.

mod prompt_template;

use augur_core::errors::AugurResult;
use augur_core::models::{ChatMessage, Content};
use augur_core::traits::ContentInjector;

pub use prompt_template::{PromptTemplateContentInjector, DEFAULT_INJECTION_PROMPT};

/// Appends each content's text to the message, one per line.
///
/// Only user messages are augmented; any other role, or an empty content
/// list, returns the message unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContentInjector;

impl ContentInjector for DefaultContentInjector {
    fn inject(&self, contents: &[Content], chat_message: &ChatMessage) -> AugurResult<ChatMessage> {
        if contents.is_empty() || !chat_message.is_user() {
            return Ok(chat_message.clone());
        }
        let mut text = chat_message.text.clone();
        for content in contents {
            text.push('\n');
            text.push_str(content.text());
        }
        Ok(chat_message.with_text(text))
    }
}
