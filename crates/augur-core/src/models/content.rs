use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TextSegment;

/// Provenance keys a retriever or aggregator may attach to a [`Content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMetadata {
    Score,
    RerankedScore,
    EmbeddingId,
}

impl ContentMetadata {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::RerankedScore => "reranked_score",
            Self::EmbeddingId => "embedding_id",
        }
    }
}

/// A unit of retrieved context eligible for injection into the outgoing message.
///
/// Equality is value-based; aggregators deduplicate on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub text_segment: TextSegment,
    #[serde(default)]
    pub metadata: BTreeMap<ContentMetadata, serde_json::Value>,
}

impl Content {
    pub fn new(text_segment: TextSegment) -> Self {
        Self {
            text_segment,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(
        text_segment: TextSegment,
        metadata: BTreeMap<ContentMetadata, serde_json::Value>,
    ) -> Self {
        Self {
            text_segment,
            metadata,
        }
    }

    pub fn text(&self) -> &str {
        &self.text_segment.text
    }

    pub fn score(&self) -> Option<f64> {
        self.metadata
            .get(&ContentMetadata::Score)
            .and_then(|v| v.as_f64())
    }

    /// A copy of this content with one provenance entry set.
    pub fn with_entry(mut self, key: ContentMetadata, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key, value.into());
        self
    }

    /// Stable hash over text and both metadata maps.
    ///
    /// Equal contents always produce equal fingerprints. Both maps are
    /// ordered, so the hashed byte stream is deterministic.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hash_field(&mut hasher, self.text_segment.text.as_bytes());
        for (key, value) in &self.text_segment.metadata {
            hash_field(&mut hasher, key.as_bytes());
            hash_field(&mut hasher, value.to_string().as_bytes());
        }
        // Separates segment metadata from content metadata.
        hasher.update(&[0xff]);
        for (key, value) in &self.metadata {
            hash_field(&mut hasher, key.as_str().as_bytes());
            hash_field(&mut hasher, value.to_string().as_bytes());
        }
        hasher.finalize()
    }
}

fn hash_field(hasher: &mut blake3::Hasher, bytes: &[u8]) {
    hasher.update(&(bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::new(TextSegment::new(text))
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::new(TextSegment::new(text))
    }
}

impl From<TextSegment> for Content {
    fn from(text_segment: TextSegment) -> Self {
        Self::new(text_segment)
    }
}
