use std::sync::Arc;

use augur_core::config::defaults::DEFAULT_THREAD_NAME_PREFIX;
use augur_core::errors::{AugurResult, ExecutorError};
use augur_core::models::Content;
use augur_core::traits::{Executor, RetrievalTask};
use rayon::prelude::*;
use tracing::debug;

/// Fans retrieval tasks out onto a rayon thread pool and joins them.
///
/// The pool is reference-counted: clones and other holders of the same
/// `Arc<ThreadPool>` keep it alive, and the executor never shuts it down.
#[derive(Debug, Clone)]
pub struct ThreadPoolExecutor {
    pool: Arc<rayon::ThreadPool>,
    name: String,
}

impl ThreadPoolExecutor {
    /// Build a dedicated pool with `num_threads` workers.
    ///
    /// `num_threads = 0` lets rayon pick (one per logical CPU).
    pub fn new(num_threads: usize) -> AugurResult<Self> {
        Self::with_thread_name(num_threads, DEFAULT_THREAD_NAME_PREFIX)
    }

    /// Build a dedicated pool whose threads are named `<prefix>-<index>`.
    pub fn with_thread_name(num_threads: usize, prefix: &str) -> AugurResult<Self> {
        let prefix = prefix.to_string();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(move |index| format!("{prefix}-{index}"))
            .build()
            .map_err(|e| ExecutorError::PoolBuildFailed {
                reason: e.to_string(),
            })?;
        Ok(Self::from_pool(Arc::new(pool)))
    }

    /// Share a pool owned by the caller.
    pub fn from_pool(pool: Arc<rayon::ThreadPool>) -> Self {
        let name = format!("thread-pool({})", pool.current_num_threads());
        Self { pool, name }
    }

    pub fn current_num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ThreadPoolExecutor {
    fn execute_all<'a>(&self, tasks: Vec<RetrievalTask<'a>>) -> AugurResult<Vec<Vec<Content>>> {
        debug!(
            tasks = tasks.len(),
            threads = self.pool.current_num_threads(),
            "dispatching retrieval tasks"
        );
        // Indexed collect keeps submission order; collecting into Result
        // stops scheduling new tasks once any task has failed.
        self.pool
            .install(|| tasks.into_par_iter().map(|task| task()).collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
