mod augmentation;
mod chat_message;
mod content;
mod metadata;
mod prompt_template;
mod query;
mod query_to_contents;
mod text_segment;

pub use augmentation::{AugmentationRequest, AugmentationResult};
pub use chat_message::{ChatMessage, ChatRole};
pub use content::{Content, ContentMetadata};
pub use metadata::Metadata;
pub use prompt_template::PromptTemplate;
pub use query::Query;
pub use query_to_contents::QueryToContents;
pub use text_segment::TextSegment;
