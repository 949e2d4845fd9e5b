//! Content aggregators.
//!
//! - [`DefaultContentAggregator`]: plain concatenation.
//! - [`ReciprocalRankFusionAggregator`]: two-stage RRF with deduplication.
//! - [`ReRankingContentAggregator`]: RRF, then a scoring model re-ranks.

mod reranking;
mod rrf;

use augur_core::errors::AugurResult;
use augur_core::models::{Content, QueryToContents};
use augur_core::traits::ContentAggregator;

pub use reranking::{QuerySelector, ReRankingContentAggregator};
pub use rrf::{ReciprocalRankFuser, ReciprocalRankFusionAggregator};

/// Concatenates every list in query order, then retriever order.
///
/// Duplicates are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContentAggregator;

impl ContentAggregator for DefaultContentAggregator {
    fn aggregate(&self, query_to_contents: &QueryToContents) -> AugurResult<Vec<Content>> {
        Ok(query_to_contents
            .iter()
            .flat_map(|(_, lists)| lists.iter())
            .flat_map(|list| list.iter().cloned())
            .collect())
    }
}
