//! # augur-observability
//!
//! Tracing subscriber setup, span macros, and the structured events emitted
//! at each stage of the augmentation pipeline.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
