use serde::{Deserialize, Serialize};

use super::defaults;

/// Multi-query expansion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Number of query variants to request from the model.
    pub n: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            n: defaults::DEFAULT_EXPANSION_N,
        }
    }
}
