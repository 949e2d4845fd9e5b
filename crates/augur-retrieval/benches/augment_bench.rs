//! Criterion benchmarks for augur-retrieval.
//!
//! - single pair, no executor (direct call path)
//! - 4 queries × 4 retrievers, no executor vs. 4-thread pool
//! - RRF over 10 lists of 50 contents

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use augur_core::models::{AugmentationRequest, ChatMessage, Content};
use augur_core::traits::{ContentRetriever, Executor, RetrievalAugmentor};
use augur_retrieval::{DefaultRetrievalAugmentor, ReciprocalRankFuser, ThreadPoolExecutor};
use test_fixtures::doubles::{FixedTransformer, RecordingRouter, StaticRetriever};

fn retrievers(count: usize, per_retriever: usize) -> Vec<Arc<dyn ContentRetriever>> {
    (0..count)
        .map(|r| -> Arc<dyn ContentRetriever> {
            let contents = (0..per_retriever)
                .map(|i| Content::from(format!("retriever {r} content {i}")))
                .collect();
            StaticRetriever::new(format!("r{r}"), contents)
        })
        .collect()
}

fn augmentor(
    queries: &[&str],
    retrievers: Vec<Arc<dyn ContentRetriever>>,
    executor: Option<Arc<dyn Executor>>,
) -> DefaultRetrievalAugmentor {
    DefaultRetrievalAugmentor::builder()
        .query_transformer(Arc::new(FixedTransformer::new(queries)))
        .query_router(Arc::new(RecordingRouter::new(retrievers)))
        .maybe_executor(executor)
        .build()
        .unwrap()
}

fn bench_single_pair(c: &mut Criterion) {
    let augmentor = augmentor(&["query"], retrievers(1, 10), None);
    let request = AugmentationRequest::from_message(ChatMessage::user("query"));
    c.bench_function("augment_single_pair", |b| {
        b.iter(|| augmentor.augment(request.clone()).unwrap())
    });
}

fn bench_fan_out(c: &mut Criterion) {
    let queries = ["q1", "q2", "q3", "q4"];
    let request = AugmentationRequest::from_message(ChatMessage::user("query"));
    let pool: Arc<dyn Executor> = Arc::new(ThreadPoolExecutor::new(4).unwrap());

    let mut group = c.benchmark_group("augment_fan_out_4x4");
    for (label, executor) in [("caller_thread", None), ("pool_4", Some(pool))] {
        let augmentor = augmentor(&queries, retrievers(4, 10), executor);
        group.bench_with_input(BenchmarkId::from_parameter(label), &request, |b, request| {
            b.iter(|| augmentor.augment(request.clone()).unwrap())
        });
    }
    group.finish();
}

fn bench_rrf(c: &mut Criterion) {
    let lists: Vec<Vec<Content>> = (0..10)
        .map(|l| {
            (0..50)
                .map(|i| Content::from(format!("content {}", (i * 7 + l * 3) % 120)))
                .collect()
        })
        .collect();
    let fuser = ReciprocalRankFuser::default();
    c.bench_function("rrf_10x50", |b| b.iter(|| fuser.fuse(&lists)));
}

criterion_group!(benches, bench_single_pair, bench_fan_out, bench_rrf);
criterion_main!(benches);
