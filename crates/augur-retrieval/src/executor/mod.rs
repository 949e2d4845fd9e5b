//! Execution resources for retrieval tasks.
//!
//! - [`SameThreadExecutor`]: sequential, on the caller.
//! - [`ThreadPoolExecutor`]: fan-out onto a shared rayon pool.

mod same_thread;
mod thread_pool;

use std::sync::Arc;

use augur_core::config::AugmentorConfig;
use augur_core::errors::AugurResult;
use augur_core::traits::Executor;

pub use same_thread::SameThreadExecutor;
pub(crate) use same_thread::run_sequentially;
pub use thread_pool::ThreadPoolExecutor;

/// Build the executor described by `[augmentor]`.
///
/// `parallelism = 0` yields `None`: retrieval runs on the calling thread.
pub fn executor_from_config(config: &AugmentorConfig) -> AugurResult<Option<Arc<dyn Executor>>> {
    if config.parallelism == 0 {
        return Ok(None);
    }
    let executor =
        ThreadPoolExecutor::with_thread_name(config.parallelism, &config.thread_name_prefix)?;
    Ok(Some(Arc::new(executor)))
}
