use std::collections::HashMap;

use augur_core::config::defaults::DEFAULT_RRF_K;
use augur_core::config::FusionConfig;
use augur_core::errors::AugurResult;
use augur_core::models::{Content, QueryToContents};
use augur_core::traits::ContentAggregator;

/// Reciprocal rank fusion over ranked content lists.
///
/// Each occurrence contributes `1 / (k + rank)` with 1-based rank. Equal
/// contents are merged and their scores summed. Output is sorted by fused
/// score, highest first; ties keep first-seen order.
#[derive(Debug, Clone, Copy)]
pub struct ReciprocalRankFuser {
    k: u32,
}

impl ReciprocalRankFuser {
    pub fn new(k: u32) -> Self {
        Self { k }
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn fuse(&self, lists: &[Vec<Content>]) -> Vec<Content> {
        let mut positions: HashMap<blake3::Hash, usize> = HashMap::new();
        let mut fused: Vec<(Content, f64)> = Vec::new();
        for list in lists {
            for (index, content) in list.iter().enumerate() {
                let score = 1.0 / (f64::from(self.k) + (index + 1) as f64);
                let key = content.fingerprint();
                match positions.get(&key) {
                    Some(&position) => fused[position].1 += score,
                    None => {
                        positions.insert(key, fused.len());
                        fused.push((content.clone(), score));
                    }
                }
            }
        }
        // Stable sort keeps first-seen order for equal scores.
        fused.sort_by(|a, b| b.1.total_cmp(&a.1));
        fused.into_iter().map(|(content, _)| content).collect()
    }

    /// Fuses each query's lists, then fuses the per-query results.
    pub fn fuse_per_query(&self, query_to_contents: &QueryToContents) -> Vec<Content> {
        let per_query: Vec<Vec<Content>> = query_to_contents
            .iter()
            .map(|(_, lists)| self.fuse(lists))
            .collect();
        self.fuse(&per_query)
    }
}

impl Default for ReciprocalRankFuser {
    fn default() -> Self {
        Self::new(DEFAULT_RRF_K)
    }
}

/// Two-stage fusion: per query, then across queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReciprocalRankFusionAggregator {
    fuser: ReciprocalRankFuser,
}

impl ReciprocalRankFusionAggregator {
    pub fn new(fuser: ReciprocalRankFuser) -> Self {
        Self { fuser }
    }

    pub fn from_config(config: &FusionConfig) -> Self {
        Self::new(ReciprocalRankFuser::new(config.rrf_k))
    }
}

impl ContentAggregator for ReciprocalRankFusionAggregator {
    fn aggregate(&self, query_to_contents: &QueryToContents) -> AugurResult<Vec<Content>> {
        Ok(self.fuser.fuse_per_query(query_to_contents))
    }
}
