use crate::errors::AugurResult;
use crate::models::Content;

/// One independent unit of retrieval work: a single (query, retriever) pair.
pub type RetrievalTask<'a> = Box<dyn FnOnce() -> AugurResult<Vec<Content>> + Send + 'a>;

/// The execution resource the orchestrator fans retrieval tasks out to.
///
/// Owned by the caller and shared across invocations. The orchestrator
/// never shuts it down.
pub trait Executor: Send + Sync {
    /// Run every task and return when all are done or the first failure is known.
    ///
    /// Outputs are returned in submission order regardless of completion order.
    fn execute_all<'a>(&self, tasks: Vec<RetrievalTask<'a>>) -> AugurResult<Vec<Vec<Content>>>;

    /// Human-readable name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
