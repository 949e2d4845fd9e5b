use augur_core::errors::AugurResult;
use augur_core::models::Content;
use augur_core::traits::{Executor, RetrievalTask};

/// Runs every task on the calling thread, one after another.
///
/// Stops at the first failure; later tasks are never started.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameThreadExecutor;

impl Executor for SameThreadExecutor {
    fn execute_all<'a>(&self, tasks: Vec<RetrievalTask<'a>>) -> AugurResult<Vec<Vec<Content>>> {
        run_sequentially(tasks)
    }

    fn name(&self) -> &str {
        "same-thread"
    }
}

pub(crate) fn run_sequentially(tasks: Vec<RetrievalTask<'_>>) -> AugurResult<Vec<Vec<Content>>> {
    tasks.into_iter().map(|task| task()).collect()
}
