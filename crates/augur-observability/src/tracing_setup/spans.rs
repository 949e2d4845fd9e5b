//! Span definitions per operation: augmentation and retrieval.

/// Create the span covering one `augment` invocation.
#[macro_export]
macro_rules! augmentation_span {
    ($invocation_id:expr, $query:expr) => {
        tracing::info_span!("augur.augmentation", invocation_id = %$invocation_id, query = %$query)
    };
}

/// Create the span covering one (query, retriever) retrieval task.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $retriever:expr) => {
        tracing::debug_span!("augur.retrieval", query = %$query, retriever = %$retriever)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const AUGMENTATION: &str = "augur.augmentation";
    pub const RETRIEVAL: &str = "augur.retrieval";
}
