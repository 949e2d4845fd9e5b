use std::sync::Arc;

use crate::errors::AugurResult;
use crate::models::Query;
use crate::traits::ContentRetriever;

/// Selects which retrievers should handle a query.
///
/// Called once per transformed query, since the choice may depend on the query text.
pub trait QueryRouter: Send + Sync {
    /// An empty selection means the query contributes no content.
    fn route(&self, query: &Query) -> AugurResult<Vec<Arc<dyn ContentRetriever>>>;
}
