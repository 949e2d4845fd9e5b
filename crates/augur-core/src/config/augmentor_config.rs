use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentorConfig {
    /// Worker threads for concurrent retrieval. 0 runs every retrieval on the caller.
    pub parallelism: usize,
    /// Prefix for worker thread names.
    pub thread_name_prefix: String,
}

impl Default for AugmentorConfig {
    fn default() -> Self {
        Self {
            parallelism: defaults::DEFAULT_PARALLELISM,
            thread_name_prefix: defaults::DEFAULT_THREAD_NAME_PREFIX.to_string(),
        }
    }
}
