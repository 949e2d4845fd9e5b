/// Errors reported by content retrievers.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("retriever '{retriever}' failed: {reason}")]
    Failed { retriever: String, reason: String },

    #[error("retriever '{retriever}' timed out after {millis}ms")]
    Timeout { retriever: String, millis: u64 },
}
