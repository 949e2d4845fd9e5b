use serde::{Deserialize, Serialize};

use super::defaults;

/// Reciprocal rank fusion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// RRF k-value: score = Σ 1/(k + rank).
    pub rrf_k: u32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            rrf_k: defaults::DEFAULT_RRF_K,
        }
    }
}
