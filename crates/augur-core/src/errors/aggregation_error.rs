/// Content aggregation errors.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("cannot select a query to re-rank against: {query_count} queries present")]
    AmbiguousQuery { query_count: usize },

    #[error("scoring model returned {actual} scores for {expected} segments")]
    ScoreCountMismatch { expected: usize, actual: usize },
}
