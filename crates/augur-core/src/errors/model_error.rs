/// Errors reported by language or scoring model collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("{reason}")]
    Failed { reason: String },
}
