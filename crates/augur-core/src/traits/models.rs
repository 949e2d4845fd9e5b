use crate::errors::AugurResult;
use crate::models::TextSegment;

/// A language model used by LLM-backed transformers and routers.
pub trait ChatModel: Send + Sync {
    /// Send a single user prompt and return the model's text reply.
    fn chat(&self, prompt: &str) -> AugurResult<String>;
}

/// A relevance model used by re-ranking aggregators.
pub trait ScoringModel: Send + Sync {
    /// One score per segment, in input order. Higher is more relevant.
    fn score_all(&self, segments: &[TextSegment], query: &str) -> AugurResult<Vec<f64>>;
}
