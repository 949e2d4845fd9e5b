use crate::errors::AugurResult;
use crate::models::{AugmentationRequest, AugmentationResult};

/// Enriches a chat message with retrieved content.
pub trait RetrievalAugmentor: Send + Sync {
    fn augment(&self, request: AugmentationRequest) -> AugurResult<AugmentationResult>;
}
