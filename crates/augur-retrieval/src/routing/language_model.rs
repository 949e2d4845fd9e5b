use std::collections::HashMap;
use std::sync::Arc;

use augur_core::config::{FallbackStrategy, RoutingConfig};
use augur_core::constants::template_vars;
use augur_core::errors::{AugurError, AugurResult, RoutingError};
use augur_core::models::{PromptTemplate, Query};
use augur_core::traits::{ChatModel, ContentRetriever, QueryRouter};
use tracing::warn;

pub const DEFAULT_ROUTING_PROMPT: &str = "Based on the user query, determine the most suitable data source(s) \
to retrieve relevant information from the following options:\n\
{{options}}\n\
It is very important that your answer consists of either a single number \
or multiple numbers separated by commas and nothing else!\n\
User query: {{query}}";

/// Lets a chat model pick retrievers from their descriptions.
///
/// Options are presented as `1: <description>` lines and the model answers
/// with comma-separated 1-based indices. A failed model call or an
/// unparsable answer is handled by the configured [`FallbackStrategy`].
pub struct LanguageModelQueryRouter {
    chat_model: Arc<dyn ChatModel>,
    prompt_template: PromptTemplate,
    options: Vec<(Arc<dyn ContentRetriever>, String)>,
    fallback_strategy: FallbackStrategy,
}

impl LanguageModelQueryRouter {
    pub fn new(
        chat_model: Arc<dyn ChatModel>,
        options: Vec<(Arc<dyn ContentRetriever>, String)>,
    ) -> Self {
        Self {
            chat_model,
            prompt_template: PromptTemplate::new(DEFAULT_ROUTING_PROMPT),
            options,
            fallback_strategy: FallbackStrategy::default(),
        }
    }

    pub fn from_config(
        chat_model: Arc<dyn ChatModel>,
        options: Vec<(Arc<dyn ContentRetriever>, String)>,
        config: &RoutingConfig,
    ) -> Self {
        Self::new(chat_model, options).with_fallback_strategy(config.fallback_strategy)
    }

    pub fn with_fallback_strategy(mut self, fallback_strategy: FallbackStrategy) -> Self {
        self.fallback_strategy = fallback_strategy;
        self
    }

    /// Replace the prompt. It may use `{{query}}` and `{{options}}`.
    pub fn with_prompt_template(mut self, prompt_template: impl Into<PromptTemplate>) -> Self {
        self.prompt_template = prompt_template.into();
        self
    }

    fn prompt(&self, query: &Query) -> AugurResult<String> {
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(i, (_, description))| format!("{}: {}", i + 1, description))
            .collect::<Vec<_>>()
            .join("\n");
        let variables = HashMap::from([
            (template_vars::QUERY, query.text.clone()),
            (template_vars::OPTIONS, options),
        ]);
        self.prompt_template.apply(&variables)
    }

    /// Comma-separated 1-based indices; repeats collapse onto the first.
    fn parse(&self, response: &str) -> Result<Vec<Arc<dyn ContentRetriever>>, RoutingError> {
        let invalid = || RoutingError::InvalidModelResponse {
            response: response.to_string(),
        };
        let mut selected: Vec<usize> = Vec::new();
        for part in response.split(',') {
            let index: usize = part.trim().parse().map_err(|_| invalid())?;
            if index == 0 || index > self.options.len() {
                return Err(invalid());
            }
            if !selected.contains(&index) {
                selected.push(index);
            }
        }
        Ok(selected
            .into_iter()
            .map(|index| self.options[index - 1].0.clone())
            .collect())
    }

    fn fallback(
        &self,
        query: &Query,
        error: RoutingError,
    ) -> AugurResult<Vec<Arc<dyn ContentRetriever>>> {
        match self.fallback_strategy {
            FallbackStrategy::DoNotRoute => {
                warn!(query = %query.text, error = %error, "routing failed, not routing");
                Ok(Vec::new())
            }
            FallbackStrategy::RouteToAll => {
                warn!(query = %query.text, error = %error, "routing failed, routing to all");
                Ok(self.options.iter().map(|(r, _)| r.clone()).collect())
            }
            FallbackStrategy::Fail => Err(AugurError::Routing(error)),
        }
    }
}

impl QueryRouter for LanguageModelQueryRouter {
    fn route(&self, query: &Query) -> AugurResult<Vec<Arc<dyn ContentRetriever>>> {
        let prompt = self.prompt(query)?;
        let response = match self.chat_model.chat(&prompt) {
            Ok(response) => response,
            Err(e) => {
                return self.fallback(
                    query,
                    RoutingError::ModelFailed {
                        reason: e.to_string(),
                    },
                )
            }
        };
        match self.parse(&response) {
            Ok(retrievers) => Ok(retrievers),
            Err(e) => self.fallback(query, e),
        }
    }
}
