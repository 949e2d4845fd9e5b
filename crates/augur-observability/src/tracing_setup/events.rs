//! Structured log events for each pipeline stage.
//!
//! Each function emits a `tracing` event with structured fields. Content
//! and message text is only logged at trace level, with newlines escaped
//! so every event stays on one line.

use augur_core::models::{ChatMessage, Content, Query};

/// Log the outcome of query transformation.
pub fn queries_transformed(original: &Query, queries: &[Query]) {
    if let [single] = queries {
        if single != original {
            tracing::debug!(
                event = "query_transformed",
                original = %original.text,
                transformed = %single.text,
                "transformed query"
            );
        }
        return;
    }
    let texts: Vec<&str> = queries.iter().map(|q| q.text.as_str()).collect();
    tracing::debug!(
        event = "query_expanded",
        original = %original.text,
        count = queries.len(),
        queries = ?texts,
        "expanded query"
    );
}

/// Log a routing decision for one query.
pub fn query_routed(query: &Query, retrievers: &[&str]) {
    tracing::debug!(
        event = "query_routed",
        query = %query.text,
        retriever_count = retrievers.len(),
        retrievers = ?retrievers,
        "routed query"
    );
}

/// Log the result of one retrieval task.
pub fn contents_retrieved(query: &Query, retriever: &str, contents: &[Content]) {
    tracing::debug!(
        event = "contents_retrieved",
        query = %query.text,
        retriever = %retriever,
        count = contents.len(),
        "retrieved contents"
    );
    if !contents.is_empty() && tracing::enabled!(tracing::Level::TRACE) {
        tracing::trace!(
            event = "contents_retrieved",
            query = %query.text,
            retriever = %retriever,
            contents = %join_escaped(contents),
            "retrieved contents"
        );
    }
}

/// Log aggregation when it changed the number of contents.
pub fn contents_aggregated(retrieved: usize, contents: &[Content]) {
    if retrieved == contents.len() {
        return;
    }
    tracing::debug!(
        event = "contents_aggregated",
        retrieved = retrieved,
        aggregated = contents.len(),
        "aggregated contents"
    );
    if tracing::enabled!(tracing::Level::TRACE) {
        tracing::trace!(
            event = "contents_aggregated",
            contents = %join_escaped(contents),
            "aggregated contents"
        );
    }
}

/// Log that no retriever was selected for any query.
pub fn augmentation_skipped(query_count: usize) {
    tracing::debug!(
        event = "augmentation_skipped",
        query_count = query_count,
        "no retrievers selected, returning original message"
    );
}

/// Log the final augmented message.
pub fn message_augmented(message: &ChatMessage, content_count: usize) {
    tracing::trace!(
        event = "message_augmented",
        content_count = content_count,
        message = %escape_newlines(&message.text),
        "augmented chat message"
    );
}

/// Replace line breaks with a literal `\n`.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

fn join_escaped(contents: &[Content]) -> String {
    contents
        .iter()
        .map(|c| format!("- {}", escape_newlines(c.text())))
        .collect::<Vec<_>>()
        .join("\\n")
}
