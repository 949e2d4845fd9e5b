//! Top-level Augur configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AugmentorConfig, ExpansionConfig, FusionConfig, InjectorConfig, ObservabilityConfig,
    RerankConfig, RoutingConfig,
};
use crate::constants::{LOG_ENV_VAR, PARALLELISM_ENV_VAR};
use crate::errors::ConfigError;

/// Configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`AUGUR_PARALLELISM`, `AUGUR_LOG`)
/// 2. Config file / string
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AugurConfig {
    pub augmentor: AugmentorConfig,
    pub expansion: ExpansionConfig,
    pub routing: RoutingConfig,
    pub fusion: FusionConfig,
    pub rerank: RerankConfig,
    pub injector: InjectorConfig,
    pub observability: ObservabilityConfig,
}

impl AugurConfig {
    /// Parse and validate a TOML string. Missing sections keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file, apply environment overrides, then validate.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `AUGUR_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(PARALLELISM_ENV_VAR) {
            self.augmentor.parallelism =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::ValidationFailed {
                        field: PARALLELISM_ENV_VAR.to_string(),
                        message: format!("expected a non-negative integer, got '{raw}'"),
                    })?;
        }
        if let Some(level) = lookup(LOG_ENV_VAR) {
            self.observability.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expansion.n == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "expansion.n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.fusion.rrf_k == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "fusion.rrf_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.rerank.max_results == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "rerank.max_results".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(min_score) = self.rerank.min_score {
            if !min_score.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "rerank.min_score".to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        if self.augmentor.thread_name_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "augmentor.thread_name_prefix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
