//! Query routers.

mod language_model;

use std::sync::Arc;

use augur_core::errors::AugurResult;
use augur_core::models::Query;
use augur_core::traits::{ContentRetriever, QueryRouter};

pub use language_model::{LanguageModelQueryRouter, DEFAULT_ROUTING_PROMPT};

/// Routes every query to the same fixed set of retrievers.
#[derive(Clone)]
pub struct DefaultQueryRouter {
    retrievers: Vec<Arc<dyn ContentRetriever>>,
}

impl DefaultQueryRouter {
    pub fn new(retrievers: Vec<Arc<dyn ContentRetriever>>) -> Self {
        Self { retrievers }
    }
}

impl QueryRouter for DefaultQueryRouter {
    fn route(&self, _query: &Query) -> AugurResult<Vec<Arc<dyn ContentRetriever>>> {
        Ok(self.retrievers.clone())
    }
}
