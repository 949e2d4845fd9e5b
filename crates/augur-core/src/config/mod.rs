//! Configuration for Augur.
//! TOML-based; every section falls back to the values in [`defaults`].

pub mod augmentor_config;
pub mod augur_config;
pub mod defaults;
pub mod expansion_config;
pub mod fusion_config;
pub mod injector_config;
pub mod observability_config;
pub mod rerank_config;
pub mod routing_config;

pub use augmentor_config::AugmentorConfig;
pub use augur_config::AugurConfig;
pub use expansion_config::ExpansionConfig;
pub use fusion_config::FusionConfig;
pub use injector_config::InjectorConfig;
pub use observability_config::ObservabilityConfig;
pub use rerank_config::RerankConfig;
pub use routing_config::{FallbackStrategy, RoutingConfig};
