use serde::{Deserialize, Serialize};

/// What a model-backed router does when the model fails or its answer can't be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    /// Select no retrievers; the query contributes nothing.
    #[default]
    DoNotRoute,
    /// Select every known retriever.
    RouteToAll,
    /// Surface the error to the caller.
    Fail,
}

/// Routing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub fallback_strategy: FallbackStrategy,
}
