/// Query routing errors.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("cannot parse retriever selection from model response '{response}'")]
    InvalidModelResponse { response: String },

    #[error("routing model failed: {reason}")]
    ModelFailed { reason: String },
}
