/// Augur version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "AUGUR_LOG";

/// Environment variable overriding `augmentor.parallelism`.
pub const PARALLELISM_ENV_VAR: &str = "AUGUR_PARALLELISM";

/// Template variable names understood by the built-in prompt templates.
pub mod template_vars {
    pub const QUERY: &str = "query";
    pub const N: &str = "n";
    pub const OPTIONS: &str = "options";
    pub const CHAT_MEMORY: &str = "chatMemory";
    pub const USER_MESSAGE: &str = "userMessage";
    pub const CONTENTS: &str = "contents";
}
