//! # augur-retrieval
//!
//! The retrieval-augmentation orchestrator and its ready-made strategies.
//!
//! A chat message flows through five pluggable stages:
//! transform (1 query → N) → route (each query → M retrievers) →
//! retrieve (every (query, retriever) pair, optionally on a thread pool) →
//! aggregate (all lists → 1) → inject (contents → augmented message).
//!
//! Results are assembled by originating query and retriever, never by
//! completion order, so the output is identical with or without an executor.

pub mod aggregation;
pub mod augmentor;
pub mod executor;
pub mod injection;
pub mod routing;
pub mod transform;

pub use aggregation::{
    DefaultContentAggregator, ReRankingContentAggregator, ReciprocalRankFuser,
    ReciprocalRankFusionAggregator,
};
pub use augmentor::{DefaultRetrievalAugmentor, RetrievalAugmentorBuilder};
pub use executor::{executor_from_config, SameThreadExecutor, ThreadPoolExecutor};
pub use injection::{DefaultContentInjector, PromptTemplateContentInjector};
pub use routing::{DefaultQueryRouter, LanguageModelQueryRouter};
pub use transform::{CompressingQueryTransformer, DefaultQueryTransformer, ExpandingQueryTransformer};
