//! Error handling for Augur.
//! One error enum per subsystem, `thiserror` only, aggregated into [`AugurError`].

pub mod aggregation_error;
pub mod config_error;
pub mod executor_error;
pub mod model_error;
pub mod retrieval_error;
pub mod routing_error;
pub mod transform_error;

pub use aggregation_error::AggregationError;
pub use config_error::ConfigError;
pub use executor_error::ExecutorError;
pub use model_error::ModelError;
pub use retrieval_error::RetrievalError;
pub use routing_error::RoutingError;
pub use transform_error::TransformError;

/// Top-level error for every pipeline operation.
///
/// Strategy failures propagate unchanged out of `augment`; there is no
/// partial result alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum AugurError {
    #[error("query transformation failed: {0}")]
    Transform(#[from] TransformError),

    #[error("query routing failed: {0}")]
    Routing(#[from] RoutingError),

    #[error("content retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("content aggregation failed: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("executor error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AugurResult<T> = Result<T, AugurError>;
