//! # augur-core
//!
//! Foundation crate for the Augur retrieval-augmentation pipeline.
//! Defines the value types carried through the pipeline, the pluggable
//! strategy traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AugurConfig;
pub use errors::{AugurError, AugurResult};
pub use models::{
    AugmentationRequest, AugmentationResult, ChatMessage, ChatRole, Content, ContentMetadata,
    Metadata, PromptTemplate, Query, QueryToContents, TextSegment,
};
