use crate::errors::AugurResult;
use crate::models::{Content, QueryToContents};

/// Merges every retriever's results across every query into one ordered list.
pub trait ContentAggregator: Send + Sync {
    /// Must be deterministic for a given input.
    fn aggregate(&self, query_to_contents: &QueryToContents) -> AugurResult<Vec<Content>>;
}
