use std::collections::HashMap;

use augur_core::config::InjectorConfig;
use augur_core::constants::template_vars;
use augur_core::errors::AugurResult;
use augur_core::models::{ChatMessage, Content, PromptTemplate};
use augur_core::traits::ContentInjector;
use serde_json::Value;

pub const DEFAULT_INJECTION_PROMPT: &str =
    "{{userMessage}}\n\nAnswer using the following information:\n{{contents}}";

/// Renders the message and contents through a prompt template.
///
/// Contents are separated by a blank line. With metadata keys configured,
/// each content renders as `content: <text>` followed by one `<key>: <value>`
/// line for every key present on its segment.
#[derive(Debug, Clone)]
pub struct PromptTemplateContentInjector {
    prompt_template: PromptTemplate,
    metadata_keys: Vec<String>,
}

impl PromptTemplateContentInjector {
    pub fn new() -> Self {
        Self {
            prompt_template: PromptTemplate::new(DEFAULT_INJECTION_PROMPT),
            metadata_keys: Vec::new(),
        }
    }

    pub fn from_config(config: &InjectorConfig) -> Self {
        let mut injector = Self::new().with_metadata_keys(config.metadata_keys.clone());
        if let Some(template) = &config.prompt_template {
            injector = injector.with_prompt_template(template.as_str());
        }
        injector
    }

    /// Replace the template. It may use `{{userMessage}}` and `{{contents}}`.
    pub fn with_prompt_template(mut self, prompt_template: impl Into<PromptTemplate>) -> Self {
        self.prompt_template = prompt_template.into();
        self
    }

    pub fn with_metadata_keys(mut self, metadata_keys: Vec<String>) -> Self {
        self.metadata_keys = metadata_keys;
        self
    }

    fn format_content(&self, content: &Content) -> String {
        if self.metadata_keys.is_empty() {
            return content.text().to_string();
        }
        let mut out = format!("content: {}", content.text());
        for key in &self.metadata_keys {
            if let Some(value) = content.text_segment.metadata.get(key) {
                out.push('\n');
                out.push_str(key);
                out.push_str(": ");
                match value {
                    Value::String(s) => out.push_str(s),
                    other => out.push_str(&other.to_string()),
                }
            }
        }
        out
    }
}

impl Default for PromptTemplateContentInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentInjector for PromptTemplateContentInjector {
    fn inject(&self, contents: &[Content], chat_message: &ChatMessage) -> AugurResult<ChatMessage> {
        if contents.is_empty() || !chat_message.is_user() {
            return Ok(chat_message.clone());
        }
        let formatted = contents
            .iter()
            .map(|content| self.format_content(content))
            .collect::<Vec<_>>()
            .join("\n\n");
        let variables = HashMap::from([
            (template_vars::USER_MESSAGE, chat_message.text.clone()),
            (template_vars::CONTENTS, formatted),
        ]);
        let text = self.prompt_template.apply(&variables)?;
        Ok(chat_message.with_text(text))
    }
}
