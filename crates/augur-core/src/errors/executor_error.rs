/// Execution resource errors.
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("failed to build thread pool: {reason}")]
    PoolBuildFailed { reason: String },

    #[error("executor returned {actual} results for {expected} tasks")]
    ResultCountMismatch { expected: usize, actual: usize },
}
