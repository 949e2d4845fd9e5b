use serde::{Deserialize, Serialize};

use super::defaults;

/// Re-ranking aggregator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankConfig {
    /// Contents scoring below this are dropped. `None` keeps everything.
    pub min_score: Option<f64>,
    /// Maximum contents kept after re-ranking.
    pub max_results: usize,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            min_score: None,
            max_results: defaults::DEFAULT_RERANK_MAX_RESULTS,
        }
    }
}
