//! Query transformers.

mod compressing;
mod expanding;

use augur_core::errors::AugurResult;
use augur_core::models::Query;
use augur_core::traits::QueryTransformer;

pub use compressing::{CompressingQueryTransformer, DEFAULT_COMPRESSION_PROMPT};
pub use expanding::{ExpandingQueryTransformer, DEFAULT_EXPANSION_PROMPT};

/// Passes the query through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultQueryTransformer;

impl QueryTransformer for DefaultQueryTransformer {
    fn transform(&self, query: &Query) -> AugurResult<Vec<Query>> {
        Ok(vec![query.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_query_unchanged() {
        let query = Query::new("what is rust?");
        assert_eq!(DefaultQueryTransformer.transform(&query).unwrap(), vec![query]);
    }
}
