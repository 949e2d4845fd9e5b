use std::sync::Arc;

use augur_core::config::defaults::DEFAULT_RERANK_MAX_RESULTS;
use augur_core::config::RerankConfig;
use augur_core::errors::{AggregationError, AugurResult};
use augur_core::models::{Content, ContentMetadata, Query, QueryToContents, TextSegment};
use augur_core::traits::{ContentAggregator, ScoringModel};

use super::ReciprocalRankFuser;

/// Picks the query the scoring model ranks against.
pub type QuerySelector = Arc<dyn Fn(&QueryToContents) -> AugurResult<Query> + Send + Sync>;

/// Fuses per query and then across queries with RRF, then re-ranks the fused contents with a
/// scoring model.
///
/// Contents below `min_score` are dropped, at most `max_results` are kept,
/// and each kept content carries its model score as
/// [`ContentMetadata::RerankedScore`]. With several queries a
/// [`QuerySelector`] is required.
pub struct ReRankingContentAggregator {
    scoring_model: Arc<dyn ScoringModel>,
    query_selector: Option<QuerySelector>,
    min_score: Option<f64>,
    max_results: usize,
    fuser: ReciprocalRankFuser,
}

impl ReRankingContentAggregator {
    pub fn new(scoring_model: Arc<dyn ScoringModel>) -> Self {
        Self {
            scoring_model,
            query_selector: None,
            min_score: None,
            max_results: DEFAULT_RERANK_MAX_RESULTS,
            fuser: ReciprocalRankFuser::default(),
        }
    }

    pub fn from_config(scoring_model: Arc<dyn ScoringModel>, config: &RerankConfig) -> Self {
        let mut aggregator = Self::new(scoring_model).with_max_results(config.max_results);
        aggregator.min_score = config.min_score;
        aggregator
    }

    pub fn with_query_selector(mut self, query_selector: QuerySelector) -> Self {
        self.query_selector = Some(query_selector);
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_fuser(mut self, fuser: ReciprocalRankFuser) -> Self {
        self.fuser = fuser;
        self
    }

    fn select_query(&self, query_to_contents: &QueryToContents) -> AugurResult<Query> {
        if let Some(selector) = &self.query_selector {
            return selector(query_to_contents);
        }
        let mut queries = query_to_contents.queries();
        match (queries.next(), queries.next()) {
            (Some(query), None) => Ok(query.clone()),
            _ => Err(AggregationError::AmbiguousQuery {
                query_count: query_to_contents.len(),
            }
            .into()),
        }
    }
}

impl ContentAggregator for ReRankingContentAggregator {
    fn aggregate(&self, query_to_contents: &QueryToContents) -> AugurResult<Vec<Content>> {
        let query = self.select_query(query_to_contents)?;

        let fused = self.fuser.fuse_per_query(query_to_contents);
        if fused.is_empty() {
            return Ok(fused);
        }

        let segments: Vec<TextSegment> = fused.iter().map(|c| c.text_segment.clone()).collect();
        let scores = self.scoring_model.score_all(&segments, &query.text)?;
        if scores.len() != segments.len() {
            return Err(AggregationError::ScoreCountMismatch {
                expected: segments.len(),
                actual: scores.len(),
            }
            .into());
        }

        let mut scored: Vec<(Content, f64)> = fused
            .into_iter()
            .zip(scores)
            .filter(|(_, score)| self.min_score.map_or(true, |min| *score >= min))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.max_results);

        Ok(scored
            .into_iter()
            .map(|(content, score)| content.with_entry(ContentMetadata::RerankedScore, score))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use augur_core::errors::AugurError;

    use super::*;

    /// Scores a segment by its text length.
    struct LengthScorer;

    impl ScoringModel for LengthScorer {
        fn score_all(&self, segments: &[TextSegment], _query: &str) -> AugurResult<Vec<f64>> {
            Ok(segments.iter().map(|s| s.text.len() as f64).collect())
        }
    }

    struct ShortScorer;

    impl ScoringModel for ShortScorer {
        fn score_all(&self, _segments: &[TextSegment], _query: &str) -> AugurResult<Vec<f64>> {
            Ok(vec![1.0])
        }
    }

    fn single_query(lists: Vec<Vec<Content>>) -> QueryToContents {
        std::iter::once((Query::new("q"), lists)).collect()
    }

    fn list(texts: &[&str]) -> Vec<Content> {
        texts.iter().map(|t| Content::from(*t)).collect()
    }

    #[test]
    fn reorders_by_model_score_and_records_it() {
        let map = single_query(vec![list(&["a", "ccc", "bb"])]);
        let out = ReRankingContentAggregator::new(Arc::new(LengthScorer))
            .aggregate(&map)
            .unwrap();
        let texts: Vec<&str> = out.iter().map(Content::text).collect();
        assert_eq!(texts, vec!["ccc", "bb", "a"]);
        assert_eq!(
            out[0].metadata.get(&ContentMetadata::RerankedScore),
            Some(&serde_json::json!(3.0))
        );
    }

    #[test]
    fn applies_min_score_and_max_results() {
        let map = single_query(vec![list(&["a", "bb"]), list(&["dddd", "ccc"])]);
        let out = ReRankingContentAggregator::new(Arc::new(LengthScorer))
            .with_min_score(2.0)
            .with_max_results(2)
            .aggregate(&map)
            .unwrap();
        let texts: Vec<&str> = out.iter().map(Content::text).collect();
        assert_eq!(texts, vec!["dddd", "ccc"]);
    }

    #[test]
    fn several_queries_need_a_selector() {
        let map: QueryToContents = vec![
            (Query::new("q1"), vec![list(&["a"])]),
            (Query::new("q2"), vec![list(&["b"])]),
        ]
        .into_iter()
        .collect();
        let err = ReRankingContentAggregator::new(Arc::new(LengthScorer))
            .aggregate(&map)
            .unwrap_err();
        assert!(matches!(
            err,
            AugurError::Aggregation(AggregationError::AmbiguousQuery { query_count: 2 })
        ));

        let selector: QuerySelector = Arc::new(|map: &QueryToContents| -> AugurResult<Query> {
            Ok(map.queries().next().cloned().unwrap_or_else(|| Query::new("")))
        });
        let out = ReRankingContentAggregator::new(Arc::new(LengthScorer))
            .with_query_selector(selector)
            .aggregate(&map)
            .unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn fuses_per_query_before_scoring() {
        let map: QueryToContents = vec![
            (Query::new("q1"), vec![list(&["a"]), list(&["c"])]),
            (Query::new("q2"), vec![list(&["b"])]),
        ]
        .into_iter()
        .collect();
        let selector: QuerySelector = Arc::new(|_: &QueryToContents| -> AugurResult<Query> {
            Ok(Query::new("q1"))
        });
        // Equal lengths tie on score, so the fused order comes through.
        let out = ReRankingContentAggregator::new(Arc::new(LengthScorer))
            .with_query_selector(selector)
            .aggregate(&map)
            .unwrap();
        let texts: Vec<&str> = out.iter().map(Content::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn score_count_mismatch_is_an_error() {
        let map = single_query(vec![list(&["a", "b"])]);
        let err = ReRankingContentAggregator::new(Arc::new(ShortScorer))
            .aggregate(&map)
            .unwrap_err();
        assert!(matches!(
            err,
            AugurError::Aggregation(AggregationError::ScoreCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn nothing_to_rank_skips_model() {
        let map = single_query(vec![Vec::new()]);
        let out = ReRankingContentAggregator::new(Arc::new(ShortScorer))
            .aggregate(&map)
            .unwrap();
        assert!(out.is_empty());
    }
}
