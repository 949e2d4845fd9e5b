//! The default retrieval augmentor.
//!
//! ```text
//!                ┌──────────────┐
//!   message ───▶ │  transformer │ ── 1..N queries
//!                └──────────────┘
//!                       │ (per query, caller thread)
//!                ┌──────────────┐
//!                │    router    │ ── 0..M retrievers per query
//!                └──────────────┘
//!                       │ (every pair, optionally on the executor)
//!                ┌──────────────┐
//!                │  retrievers  │ ── one list per (query, retriever)
//!                └──────────────┘
//!                       │
//!                ┌──────────────┐      ┌──────────────┐
//!                │  aggregator  │ ───▶ │   injector   │ ───▶ augmented message
//!                └──────────────┘      └──────────────┘
//! ```

use std::sync::Arc;

use augur_core::config::AugurConfig;
use augur_core::errors::{AugurResult, ConfigError, ExecutorError, TransformError};
use augur_core::models::{
    AugmentationRequest, AugmentationResult, Content, Query, QueryToContents,
};
use augur_core::traits::{
    ContentAggregator, ContentInjector, ContentRetriever, Executor, QueryRouter, QueryTransformer,
    RetrievalAugmentor, RetrievalTask,
};
use augur_observability::{augmentation_span, events, retrieval_span};
use uuid::Uuid;

use crate::aggregation::DefaultContentAggregator;
use crate::executor::{executor_from_config, run_sequentially};
use crate::injection::{DefaultContentInjector, PromptTemplateContentInjector};
use crate::routing::DefaultQueryRouter;
use crate::transform::DefaultQueryTransformer;

/// Orchestrates transform → route → retrieve → aggregate → inject.
///
/// Stateless between invocations: concurrent `augment` calls from several
/// threads are independent. The executor, when set, is shared and never
/// shut down by the augmentor.
pub struct DefaultRetrievalAugmentor {
    query_transformer: Arc<dyn QueryTransformer>,
    query_router: Arc<dyn QueryRouter>,
    content_aggregator: Arc<dyn ContentAggregator>,
    content_injector: Arc<dyn ContentInjector>,
    executor: Option<Arc<dyn Executor>>,
}

impl DefaultRetrievalAugmentor {
    pub fn builder() -> RetrievalAugmentorBuilder {
        RetrievalAugmentorBuilder::default()
    }

    pub fn executor(&self) -> Option<&Arc<dyn Executor>> {
        self.executor.as_ref()
    }

    /// Route every query, then retrieve every (query, retriever) pair.
    ///
    /// Every query gets an entry, possibly with no lists. Lists are placed
    /// by originating query and retriever position.
    fn process(&self, queries: &[Query]) -> AugurResult<QueryToContents> {
        let routed = self.route_all(queries)?;

        let pairs: Vec<(&Query, &dyn ContentRetriever)> = queries
            .iter()
            .zip(&routed)
            .flat_map(|(query, retrievers)| retrievers.iter().map(move |r| (query, r.as_ref())))
            .collect();

        let results = match pairs.as_slice() {
            [] => Vec::new(),
            [(query, retriever)] => vec![retrieve(query, *retriever)?],
            _ => self.retrieve_all(&pairs)?,
        };
        if results.len() != pairs.len() {
            return Err(ExecutorError::ResultCountMismatch {
                expected: pairs.len(),
                actual: results.len(),
            }
            .into());
        }

        let mut query_to_contents = QueryToContents::with_capacity(queries.len());
        let mut results = results.into_iter();
        for (query, retrievers) in queries.iter().zip(&routed) {
            let lists: Vec<Vec<Content>> = results.by_ref().take(retrievers.len()).collect();
            query_to_contents.insert(query.clone(), lists);
        }
        Ok(query_to_contents)
    }

    fn route_all(&self, queries: &[Query]) -> AugurResult<Vec<Vec<Arc<dyn ContentRetriever>>>> {
        queries
            .iter()
            .map(|query| {
                let retrievers = self.query_router.route(query)?;
                let names: Vec<&str> = retrievers.iter().map(|r| r.name()).collect();
                events::query_routed(query, &names);
                Ok(retrievers)
            })
            .collect()
    }

    fn retrieve_all(
        &self,
        pairs: &[(&Query, &dyn ContentRetriever)],
    ) -> AugurResult<Vec<Vec<Content>>> {
        let parent = tracing::Span::current();
        let mut tasks: Vec<RetrievalTask<'_>> = Vec::with_capacity(pairs.len());
        for &(query, retriever) in pairs {
            let parent = parent.clone();
            tasks.push(Box::new(move || -> AugurResult<Vec<Content>> {
                let _entered = parent.enter();
                retrieve(query, retriever)
            }));
        }
        match &self.executor {
            Some(executor) => executor.execute_all(tasks),
            None => run_sequentially(tasks),
        }
    }
}

impl RetrievalAugmentor for DefaultRetrievalAugmentor {
    fn augment(&self, request: AugmentationRequest) -> AugurResult<AugmentationResult> {
        let AugmentationRequest {
            chat_message,
            metadata,
        } = request;
        let original_query = Query::with_metadata(chat_message.text.clone(), metadata);

        let invocation_id = Uuid::new_v4();
        let span = augmentation_span!(invocation_id, original_query.text);
        let _entered = span.enter();

        let queries = distinct(self.query_transformer.transform(&original_query)?);
        if queries.is_empty() {
            return Err(TransformError::NoQueries.into());
        }
        events::queries_transformed(&original_query, &queries);

        let query_to_contents = self.process(&queries)?;
        if query_to_contents.list_count() == 0 {
            events::augmentation_skipped(queries.len());
            return Ok(AugmentationResult::unchanged(chat_message));
        }

        let contents = self.content_aggregator.aggregate(&query_to_contents)?;
        events::contents_aggregated(query_to_contents.content_count(), &contents);

        let augmented = self.content_injector.inject(&contents, &chat_message)?;
        events::message_augmented(&augmented, contents.len());

        Ok(AugmentationResult::new(augmented, contents))
    }
}

fn retrieve(query: &Query, retriever: &dyn ContentRetriever) -> AugurResult<Vec<Content>> {
    let _span = retrieval_span!(query.text, retriever.name()).entered();
    let contents = retriever.retrieve(query)?;
    events::contents_retrieved(query, retriever.name(), &contents);
    Ok(contents)
}

/// Equal queries collapse onto their first occurrence.
fn distinct(queries: Vec<Query>) -> Vec<Query> {
    let mut unique: Vec<Query> = Vec::with_capacity(queries.len());
    for query in queries {
        if !unique.contains(&query) {
            unique.push(query);
        }
    }
    unique
}

/// Assembles a [`DefaultRetrievalAugmentor`].
///
/// A router (or a single retriever) is required. Everything else defaults:
/// pass-through transformer, concatenating aggregator, append-lines
/// injector, and no executor (retrieval runs on the calling thread).
#[derive(Default)]
pub struct RetrievalAugmentorBuilder {
    query_transformer: Option<Arc<dyn QueryTransformer>>,
    query_router: Option<Arc<dyn QueryRouter>>,
    content_aggregator: Option<Arc<dyn ContentAggregator>>,
    content_injector: Option<Arc<dyn ContentInjector>>,
    executor: Option<Arc<dyn Executor>>,
}

impl RetrievalAugmentorBuilder {
    pub fn query_transformer(mut self, query_transformer: Arc<dyn QueryTransformer>) -> Self {
        self.query_transformer = Some(query_transformer);
        self
    }

    pub fn query_router(mut self, query_router: Arc<dyn QueryRouter>) -> Self {
        self.query_router = Some(query_router);
        self
    }

    /// Route every query to this one retriever.
    pub fn content_retriever(self, content_retriever: Arc<dyn ContentRetriever>) -> Self {
        self.query_router(Arc::new(DefaultQueryRouter::new(vec![content_retriever])))
    }

    pub fn content_aggregator(mut self, content_aggregator: Arc<dyn ContentAggregator>) -> Self {
        self.content_aggregator = Some(content_aggregator);
        self
    }

    pub fn content_injector(mut self, content_injector: Arc<dyn ContentInjector>) -> Self {
        self.content_injector = Some(content_injector);
        self
    }

    pub fn executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn maybe_executor(mut self, executor: Option<Arc<dyn Executor>>) -> Self {
        self.executor = executor;
        self
    }

    /// Apply `[augmentor]` and `[injector]`.
    ///
    /// Builds a thread pool when `parallelism > 0`, and a prompt-template
    /// injector when a template or metadata keys are configured. Components
    /// set explicitly afterwards take precedence.
    pub fn config(mut self, config: &AugurConfig) -> AugurResult<Self> {
        self.executor = executor_from_config(&config.augmentor)?;
        if config.injector.prompt_template.is_some() || !config.injector.metadata_keys.is_empty() {
            self.content_injector =
                Some(Arc::new(PromptTemplateContentInjector::from_config(&config.injector)));
        }
        Ok(self)
    }

    pub fn build(self) -> AugurResult<DefaultRetrievalAugmentor> {
        let query_router = self
            .query_router
            .ok_or(ConfigError::MissingComponent("query_router"))?;
        Ok(DefaultRetrievalAugmentor {
            query_transformer: self
                .query_transformer
                .unwrap_or_else(|| Arc::new(DefaultQueryTransformer)),
            query_router,
            content_aggregator: self
                .content_aggregator
                .unwrap_or_else(|| Arc::new(DefaultContentAggregator)),
            content_injector: self
                .content_injector
                .unwrap_or_else(|| Arc::new(DefaultContentInjector)),
            executor: self.executor,
        })
    }
}
