mod aggregator;
mod augmentor;
mod executor;
mod injector;
mod models;
mod retriever;
mod router;
mod transformer;

pub use aggregator::ContentAggregator;
pub use augmentor::RetrievalAugmentor;
pub use executor::{Executor, RetrievalTask};
pub use injector::ContentInjector;
pub use models::{ChatModel, ScoringModel};
pub use retriever::ContentRetriever;
pub use router::QueryRouter;
pub use transformer::QueryTransformer;
