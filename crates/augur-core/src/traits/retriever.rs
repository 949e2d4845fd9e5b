use crate::errors::AugurResult;
use crate::models::{Content, Query};

/// Returns content for a query from one source.
///
/// Calls are synchronous and may block on network or database I/O. Any
/// timeout is the implementation's responsibility.
pub trait ContentRetriever: Send + Sync {
    /// Contents ordered by relevance, most relevant first.
    fn retrieve(&self, query: &Query) -> AugurResult<Vec<Content>>;

    /// Human-readable name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
