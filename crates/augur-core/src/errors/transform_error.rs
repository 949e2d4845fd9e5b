/// Query transformation errors.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("transformer returned no queries")]
    NoQueries,

    #[error("invalid model response: {reason}")]
    InvalidModelResponse { reason: String },
}
