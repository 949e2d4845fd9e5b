use crate::errors::AugurResult;
use crate::models::Query;

/// Expands one incoming query into one or more queries (rewriting, multi-query expansion).
pub trait QueryTransformer: Send + Sync {
    /// Must return at least one query; returning the input unchanged is allowed.
    fn transform(&self, query: &Query) -> AugurResult<Vec<Query>>;
}
