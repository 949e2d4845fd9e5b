//! Property tests for the augmentor and reciprocal rank fusion.

use std::sync::Arc;

use proptest::prelude::*;

use augur_core::models::{AugmentationRequest, ChatMessage, Content, Query, QueryToContents};
use augur_core::traits::{ContentAggregator, ContentRetriever, Executor, RetrievalAugmentor};
use augur_retrieval::{
    DefaultContentAggregator, DefaultRetrievalAugmentor, ReciprocalRankFuser, SameThreadExecutor,
    ThreadPoolExecutor,
};
use test_fixtures::doubles::{FixedTransformer, RecordingRouter, StaticRetriever};

/// Retriever contents: up to 4 retrievers, each with up to 5 short texts.
fn retrievers_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-e]{1,2}", 0..5), 0..4)
}

fn queries_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("q[0-9]", 1..4)
}

/// Even-indexed queries go to every other retriever, odd-indexed ones to all.
fn build(
    retrievers: &[Vec<String>],
    queries: &[String],
    executor: Option<Arc<dyn Executor>>,
) -> DefaultRetrievalAugmentor {
    let all: Vec<Arc<dyn ContentRetriever>> = retrievers
        .iter()
        .enumerate()
        .map(|(i, texts)| -> Arc<dyn ContentRetriever> {
            let contents = texts.iter().map(|t| Content::from(t.as_str())).collect();
            StaticRetriever::new(format!("r{i}"), contents)
        })
        .collect();
    let mut router = RecordingRouter::new(all.clone());
    for (i, query) in queries.iter().enumerate() {
        if i % 2 == 0 {
            let selected = all.iter().step_by(2).cloned().collect();
            router = router.with_route(query.as_str(), selected);
        }
    }
    let texts: Vec<&str> = queries.iter().map(String::as_str).collect();
    DefaultRetrievalAugmentor::builder()
        .query_transformer(Arc::new(FixedTransformer::new(&texts)))
        .query_router(Arc::new(router))
        .maybe_executor(executor)
        .build()
        .unwrap()
}

// =============================================================================
// Executor independence
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn executor_does_not_change_result(
        retrievers in retrievers_strategy(),
        queries in queries_strategy(),
        threads in 1usize..=4,
    ) {
        let request = AugmentationRequest::from_message(ChatMessage::user("query"));
        let baseline = build(&retrievers, &queries, None).augment(request.clone()).unwrap();

        let same_thread: Arc<dyn Executor> = Arc::new(SameThreadExecutor);
        let pool: Arc<dyn Executor> = Arc::new(ThreadPoolExecutor::new(threads).unwrap());
        for executor in [same_thread, pool] {
            let result = build(&retrievers, &queries, Some(executor)).augment(request.clone()).unwrap();
            prop_assert_eq!(&result, &baseline);
        }
    }
}

// =============================================================================
// Default aggregation drops nothing
// =============================================================================
proptest! {
    #[test]
    fn default_aggregation_keeps_every_content(
        lists in prop::collection::vec(prop::collection::vec("[a-z]{1,3}", 0..6), 0..5),
    ) {
        let total: usize = lists.iter().map(Vec::len).sum();
        let contents: Vec<Vec<Content>> = lists
            .iter()
            .map(|l| l.iter().map(|t| Content::from(t.as_str())).collect())
            .collect();
        let map: QueryToContents = std::iter::once((Query::new("q"), contents)).collect();
        let aggregated = DefaultContentAggregator.aggregate(&map).unwrap();
        prop_assert_eq!(aggregated.len(), total);
        let flattened: Vec<String> = lists.into_iter().flatten().collect();
        let texts: Vec<String> = aggregated.iter().map(|c| c.text().to_string()).collect();
        prop_assert_eq!(texts, flattened);
    }
}

// =============================================================================
// RRF: output is the distinct input set, deterministic
// =============================================================================
proptest! {
    #[test]
    fn rrf_output_is_distinct_input_set(
        lists in prop::collection::vec(prop::collection::vec("[a-f]", 0..6), 0..5),
        k in 1u32..100,
    ) {
        let contents: Vec<Vec<Content>> = lists
            .iter()
            .map(|l| l.iter().map(|t| Content::from(t.as_str())).collect())
            .collect();
        let fuser = ReciprocalRankFuser::new(k);
        let fused = fuser.fuse(&contents);

        let mut expected: Vec<&str> = lists.iter().flatten().map(String::as_str).collect();
        expected.sort_unstable();
        expected.dedup();
        let mut actual: Vec<&str> = fused.iter().map(Content::text).collect();
        actual.sort_unstable();
        prop_assert_eq!(&actual, &expected);

        prop_assert_eq!(fuser.fuse(&contents), fused);
    }

    #[test]
    fn rrf_single_list_of_distinct_items_keeps_order(
        items in prop::collection::hash_set("[a-z]{1,4}", 0..10),
    ) {
        let items: Vec<String> = items.into_iter().collect();
        let list: Vec<Content> = items.iter().map(|t| Content::from(t.as_str())).collect();
        let fused = ReciprocalRankFuser::default().fuse(&[list.clone()]);
        prop_assert_eq!(fused, list);
    }
}
