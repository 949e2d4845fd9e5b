use serde::{Deserialize, Serialize};

/// Prompt-template injector configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Overrides the built-in template. Must use `{{userMessage}}` and `{{contents}}`.
    pub prompt_template: Option<String>,
    /// Segment metadata keys rendered under each content.
    pub metadata_keys: Vec<String>,
}
