use std::collections::HashMap;
use std::sync::Arc;

use augur_core::constants::template_vars;
use augur_core::errors::AugurResult;
use augur_core::models::{ChatMessage, ChatRole, PromptTemplate, Query};
use augur_core::traits::{ChatModel, QueryTransformer};

pub const DEFAULT_COMPRESSION_PROMPT: &str = "Read and understand the conversation between the User and the AI. \
Then, analyze the new query from the User. \
Identify all relevant details, terms, and context from both the conversation and the new query. \
Reformulate this query into a clear, concise, and self-contained format suitable for information retrieval.\n\
\n\
Conversation:\n\
{{chatMemory}}\n\
\n\
User query: {{query}}\n\
\n\
It is very important that you provide only reformulated query and nothing else! \
Do not prepend a query with anything!";

/// Rewrites a follow-up query into a self-contained one using the chat memory.
///
/// With no usable history, or a blank model reply, the query passes through.
pub struct CompressingQueryTransformer {
    chat_model: Arc<dyn ChatModel>,
    prompt_template: PromptTemplate,
}

impl CompressingQueryTransformer {
    pub fn new(chat_model: Arc<dyn ChatModel>) -> Self {
        Self {
            chat_model,
            prompt_template: PromptTemplate::new(DEFAULT_COMPRESSION_PROMPT),
        }
    }

    /// Replace the prompt. It may use `{{query}}` and `{{chatMemory}}`.
    pub fn with_prompt_template(mut self, prompt_template: impl Into<PromptTemplate>) -> Self {
        self.prompt_template = prompt_template.into();
        self
    }
}

impl QueryTransformer for CompressingQueryTransformer {
    fn transform(&self, query: &Query) -> AugurResult<Vec<Query>> {
        let Some(chat_memory) = format_chat_memory(query.chat_memory()) else {
            return Ok(vec![query.clone()]);
        };
        let variables = HashMap::from([
            (template_vars::QUERY, query.text.clone()),
            (template_vars::CHAT_MEMORY, chat_memory),
        ]);
        let prompt = self.prompt_template.apply(&variables)?;
        let reply = self.chat_model.chat(&prompt)?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Ok(vec![query.clone()]);
        }
        Ok(vec![query.rewritten(reply)])
    }
}

/// One `User: ...` / `AI: ...` line per message. System messages are skipped.
fn format_chat_memory(messages: &[ChatMessage]) -> Option<String> {
    let lines: Vec<String> = messages
        .iter()
        .filter_map(|message| match message.role {
            ChatRole::User => Some(format!("User: {}", message.text)),
            ChatRole::Ai => Some(format!("AI: {}", message.text)),
            ChatRole::System => None,
        })
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use augur_core::models::Metadata;

    use super::*;

    struct Recording {
        reply: &'static str,
        prompts: Mutex<Vec<String>>,
    }

    impl Recording {
        fn new(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    impl ChatModel for Recording {
        fn chat(&self, prompt: &str) -> AugurResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    fn query_with_memory(text: &str, memory: Vec<ChatMessage>) -> Query {
        let mut metadata = Metadata::from_message(ChatMessage::user(text));
        metadata.chat_memory = memory;
        Query::with_metadata(text, metadata)
    }

    #[test]
    fn no_memory_skips_model() {
        let model = Recording::new("unused");
        let query = Query::new("how old is he?");
        let queries = CompressingQueryTransformer::new(model.clone())
            .transform(&query)
            .unwrap();
        assert_eq!(queries, vec![query]);
        assert!(model.prompts.lock().unwrap().is_empty());
    }

    #[test]
    fn rewrites_using_formatted_memory() {
        let model = Recording::new("  How old is Klaus Heisler?  ");
        let query = query_with_memory(
            "How old is he?",
            vec![
                ChatMessage::system("be brief"),
                ChatMessage::user("Tell me about Klaus Heisler"),
                ChatMessage::ai("He is a chemist."),
            ],
        );
        let queries = CompressingQueryTransformer::new(model.clone())
            .transform(&query)
            .unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].text, "How old is Klaus Heisler?");
        assert_eq!(queries[0].metadata, query.metadata);

        let prompts = model.prompts.lock().unwrap();
        assert!(prompts[0].contains("User: Tell me about Klaus Heisler\nAI: He is a chemist."));
        assert!(prompts[0].contains("User query: How old is he?"));
        assert!(!prompts[0].contains("be brief"));
    }

    #[test]
    fn blank_reply_keeps_original() {
        let model = Recording::new("   ");
        let query = query_with_memory("and him?", vec![ChatMessage::user("who is she?")]);
        let queries = CompressingQueryTransformer::new(model).transform(&query).unwrap();
        assert_eq!(queries, vec![query]);
    }

    #[test]
    fn system_only_memory_counts_as_empty() {
        assert_eq!(format_chat_memory(&[ChatMessage::system("rules")]), None);
    }
}
