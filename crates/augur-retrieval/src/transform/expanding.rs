use std::collections::HashMap;
use std::sync::Arc;

use augur_core::config::defaults::DEFAULT_EXPANSION_N;
use augur_core::config::ExpansionConfig;
use augur_core::constants::template_vars;
use augur_core::errors::{AugurResult, ConfigError, TransformError};
use augur_core::models::{PromptTemplate, Query};
use augur_core::traits::{ChatModel, QueryTransformer};
use serde_json::Value;

pub const DEFAULT_EXPANSION_PROMPT: &str = "Generate EXACTLY {{n}} different versions of the provided user query. \
CONSTRAINTS: \
Each version should be worded differently, using synonyms or alternative sentence structures, \
but they should all retain the original meaning. \
INPUT: \
User query: {{query}}\n\
OUTPUT FORMAT (follow exactly): {\"queries\": [\"first version\", \"second version\"]}";

/// Asks a chat model for `n` paraphrases of the query.
///
/// The reply must contain a JSON object with a `queries` array. Non-string
/// entries are taken as their JSON text and nulls are skipped. Blank and
/// repeated entries are dropped and at most `n` are kept. Every generated
/// query keeps the original's metadata.
pub struct ExpandingQueryTransformer {
    chat_model: Arc<dyn ChatModel>,
    prompt_template: PromptTemplate,
    n: usize,
}

impl ExpandingQueryTransformer {
    pub fn new(chat_model: Arc<dyn ChatModel>) -> Self {
        Self {
            chat_model,
            prompt_template: PromptTemplate::new(DEFAULT_EXPANSION_PROMPT),
            n: DEFAULT_EXPANSION_N,
        }
    }

    pub fn from_config(chat_model: Arc<dyn ChatModel>, config: &ExpansionConfig) -> AugurResult<Self> {
        Self::new(chat_model).with_n(config.n)
    }

    pub fn with_n(mut self, n: usize) -> AugurResult<Self> {
        if n == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "expansion.n".into(),
                message: "must be at least 1".into(),
            }
            .into());
        }
        self.n = n;
        Ok(self)
    }

    /// Replace the prompt. It may use `{{query}}` and `{{n}}`.
    pub fn with_prompt_template(mut self, prompt_template: impl Into<PromptTemplate>) -> Self {
        self.prompt_template = prompt_template.into();
        self
    }

    fn parse(&self, response: &str, query: &Query) -> AugurResult<Vec<Query>> {
        let object = match (response.find('{'), response.rfind('}')) {
            (Some(start), Some(end)) if start < end => &response[start..=end],
            _ => {
                return Err(TransformError::InvalidModelResponse {
                    reason: "no JSON object in response".into(),
                }
                .into())
            }
        };
        let root: Value = serde_json::from_str(object).map_err(|e| {
            TransformError::InvalidModelResponse {
                reason: e.to_string(),
            }
        })?;
        let items = root.get("queries").and_then(Value::as_array).ok_or_else(|| {
            TransformError::InvalidModelResponse {
                reason: "`queries` is missing or not an array".into(),
            }
        })?;

        let mut texts: Vec<String> = Vec::with_capacity(self.n);
        for item in items {
            if texts.len() == self.n {
                break;
            }
            let text = match item {
                Value::String(s) => s.trim().to_string(),
                Value::Null => continue,
                other => other.to_string(),
            };
            if !text.is_empty() && !texts.contains(&text) {
                texts.push(text);
            }
        }
        if texts.is_empty() {
            return Err(TransformError::InvalidModelResponse {
                reason: "no usable queries in response".into(),
            }
            .into());
        }
        Ok(texts.into_iter().map(|text| query.rewritten(text)).collect())
    }
}

impl QueryTransformer for ExpandingQueryTransformer {
    fn transform(&self, query: &Query) -> AugurResult<Vec<Query>> {
        let variables = HashMap::from([
            (template_vars::QUERY, query.text.clone()),
            (template_vars::N, self.n.to_string()),
        ]);
        let prompt = self.prompt_template.apply(&variables)?;
        let response = self.chat_model.chat(&prompt)?;
        self.parse(&response, query)
    }
}
