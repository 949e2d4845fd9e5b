// Single source of truth for all default values.

// --- Augmentor ---
pub const DEFAULT_PARALLELISM: usize = 0; // synchronous
pub const DEFAULT_THREAD_NAME_PREFIX: &str = "augur-retrieval";

// --- Query expansion ---
pub const DEFAULT_EXPANSION_N: usize = 3;

// --- Fusion ---
pub const DEFAULT_RRF_K: u32 = 60;

// --- Re-ranking ---
pub const DEFAULT_RERANK_MAX_RESULTS: usize = 20;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
